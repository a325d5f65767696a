//! Output dialects a glossary export can be split into.
//!
//! Each dialect is one record type implementing [`OutputRecord`]. The trait
//! tells the header analyzer which comment columns to look for and the
//! writer how to lay the file out.

pub mod glossary;
pub mod translation_memory;

use csv::{QuoteStyle, StringRecord};
use serde::Serialize;

// Reexporting the formats for easier access
pub use glossary::GlossaryRecord;
pub use translation_memory::TranslationMemoryRecord;

use crate::columns::{ColumnSpec, LanguageColumns};

/// One row of a per-language output file.
pub trait OutputRecord: Serialize + Sized {
    /// Short name used in log messages.
    const NAME: &'static str;

    /// Exact name of the shared comment column.
    const COMMENT_HEADER: &'static str;

    /// Prefix of the per-language comment columns.
    const COMMENT_PREFIX: &'static str;

    /// Fixed header row written before the records, if the dialect has one.
    const HEADER: Option<&'static [&'static str]>;

    /// Quoting applied to every field.
    const QUOTE_STYLE: QuoteStyle;

    /// Builds the record for one language out of one export row.
    fn from_row(row: &StringRecord, spec: &ColumnSpec, language: &LanguageColumns) -> Self;

    /// The translated term; a buffer is only written if one of these is non-empty.
    fn translation(&self) -> &str;
}

/// Writer settings shared by all dialects: comma separated, CRLF terminated.
pub(crate) fn writer_builder<R: OutputRecord>() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(false)
        .quote_style(R::QUOTE_STYLE)
        .terminator(csv::Terminator::CRLF);
    builder
}
