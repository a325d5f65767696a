//! Plain glossary CSV, the input format of `csv2tbx`.
//!
//! Three columns `comment,term,translation`, no header row.

use csv::{QuoteStyle, StringRecord};
use serde::{Deserialize, Serialize};

use crate::{
    columns::{ColumnSpec, LanguageColumns, cell},
    formats::OutputRecord,
};

/// Separator between the shared comment and the language comment.
const COMMENT_SEPARATOR: &str = "\n\n";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GlossaryRecord {
    pub comment: String,
    pub term: String,
    pub translation: String,
}

impl OutputRecord for GlossaryRecord {
    const NAME: &'static str = "glossary";
    const COMMENT_HEADER: &'static str = "comment";
    const COMMENT_PREFIX: &'static str = "comment_";
    const HEADER: Option<&'static [&'static str]> = None;
    const QUOTE_STYLE: QuoteStyle = QuoteStyle::Necessary;

    fn from_row(row: &StringRecord, spec: &ColumnSpec, language: &LanguageColumns) -> Self {
        // Joined even when one side is empty; the trim drops the dangling blank line.
        let comment = [cell(row, spec.comment), cell(row, language.comment)].join(COMMENT_SEPARATOR);
        GlossaryRecord {
            comment: comment.trim().to_string(),
            term: cell(row, spec.term).trim().to_string(),
            translation: cell(row, language.term).trim().to_string(),
        }
    }

    fn translation(&self) -> &str {
        &self.translation
    }
}
