#![forbid(unsafe_code)]
//! Glossary plumbing between Transifex CSV exports, TBX and Weblate.
//!
//! A Transifex glossary export is one wide CSV table: shared columns (`term`,
//! `comment`/`notes`, `pos`) followed by per-language columns
//! (`translation_<lang>`, `comment_<lang>`/`notes_<lang>`). This crate splits
//! such a table into one file per language and pushes the results onward.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use txglossary::{GlossaryRecord, Split, traits::Parser};
//!
//! // One `<lang>.csv` per language with at least one translated term
//! let split = Split::<GlossaryRecord>::read_from("glossary.csv")?;
//! split.write_all("out")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Output dialects
//!
//! - [`GlossaryRecord`]: `comment,term,translation` without header, the
//!   input expected by `csv2tbx`
//! - [`TranslationMemoryRecord`]: the quoted 8-column CSV Weblate imports
//!   into glossary components

pub mod columns;
pub mod config;
pub mod error;
pub mod formats;
pub mod language;
pub mod split;
pub mod tbx;
pub mod traits;
pub mod weblate;

// Re-export most used types for easy consumption
pub use crate::{
    columns::{ColumnSpec, LanguageColumns},
    config::ClientConfig,
    error::Error,
    formats::{GlossaryRecord, OutputRecord, TranslationMemoryRecord},
    language::{language_from_path, weblate_language_code},
    split::{LanguageBuffer, Split},
    tbx::Csv2Tbx,
    weblate::{
        Client, Component, ComponentPath, PushEvent, PushReport, UploadMethod, WeblateApi,
        push_files, push_files_with,
    },
};
