//! All error types for the txglossary crate.
//!
//! These are returned from every fallible operation (reading exports, writing
//! split files, running the TBX converter, talking to Weblate).

use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("missing header row in {0}")]
    MissingHeader(String),

    #[error("`{program}` failed with {status}")]
    Converter { program: String, status: ExitStatus },

    #[error("Component {0} is not a glossary")]
    NotAGlossary(String),

    #[error("invalid component `{0}`, expected project/component")]
    InvalidComponent(String),

    #[error("cannot derive a language code from `{0}`")]
    InvalidPath(String),
}

impl Error {
    /// Creates a new converter error for a program that exited unsuccessfully
    pub fn converter_error(program: impl Into<String>, status: ExitStatus) -> Self {
        Error::Converter {
            program: program.into(),
            status,
        }
    }
}
