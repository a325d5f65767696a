//! Translation-memory CSV as imported by Weblate glossary components.
//!
//! Every field is quoted and the file starts with a fixed header row.

use csv::{QuoteStyle, StringRecord};
use serde::{Serialize, Serializer};

use crate::{
    columns::{ColumnSpec, LanguageColumns, cell},
    formats::OutputRecord,
};

pub const HEADER: [&str; 8] = [
    "location",
    "source",
    "target",
    "id",
    "fuzzy",
    "context",
    "translator_comments",
    "developer_comments",
];

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TranslationMemoryRecord {
    pub location: String,
    pub source: String,
    pub target: String,
    pub id: String,
    #[serde(serialize_with = "serialize_flag")]
    pub fuzzy: bool,
    pub context: String,
    pub translator_comments: String,
    pub developer_comments: String,
}

/// Weblate expects Python-style booleans.
fn serialize_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

impl OutputRecord for TranslationMemoryRecord {
    const NAME: &'static str = "translation memory";
    const COMMENT_HEADER: &'static str = "notes";
    const COMMENT_PREFIX: &'static str = "notes_";
    const HEADER: Option<&'static [&'static str]> = Some(&HEADER);
    const QUOTE_STYLE: QuoteStyle = QuoteStyle::Always;

    fn from_row(row: &StringRecord, spec: &ColumnSpec, language: &LanguageColumns) -> Self {
        let term = cell(row, spec.term).trim();
        let developer_comments = [cell(row, spec.pos), cell(row, spec.comment)]
            .into_iter()
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join("; ");

        TranslationMemoryRecord {
            location: String::new(),
            source: term.to_string(),
            target: cell(row, language.term).trim().to_string(),
            id: String::new(),
            fuzzy: false,
            context: term.to_string(),
            translator_comments: cell(row, language.comment).to_string(),
            developer_comments,
        }
    }

    fn translation(&self) -> &str {
        &self.target
    }
}
