//! TBX output through the external `csv2tbx` converter.
//!
//! The glossary CSV written by [`crate::GlossaryRecord`] buffers is handed
//! to `csv2tbx` (from the Translate Toolkit), which produces the TBX file
//! next to it. This crate never writes TBX itself.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::info;

use crate::error::Error;

pub const DEFAULT_PROGRAM: &str = "csv2tbx";
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Invocation settings for the external CSV to TBX converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Csv2Tbx {
    program: PathBuf,
    charset: String,
}

impl Default for Csv2Tbx {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

impl Csv2Tbx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `program` instead of `csv2tbx` from `PATH`.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to the converter for one file pair.
    pub fn args(&self, csv: &Path, tbx: &Path) -> Vec<OsString> {
        vec![
            OsString::from(format!("--charset={}", self.charset)),
            csv.as_os_str().to_owned(),
            tbx.as_os_str().to_owned(),
        ]
    }

    /// Converts `csv` into `tbx`, blocking until the converter exits.
    ///
    /// A converter that cannot be started or exits unsuccessfully is an error.
    pub fn convert(&self, csv: &Path, tbx: &Path) -> Result<(), Error> {
        info!(program = %self.program.display(), csv = %csv.display(), tbx = %tbx.display(), "Converting to TBX");
        let status = Command::new(&self.program)
            .args(self.args(csv, tbx))
            .status()?;
        if !status.success() {
            return Err(Error::converter_error(
                self.program.display().to_string(),
                status,
            ));
        }
        Ok(())
    }

    /// Converts `csv` into a `.tbx` file with the same stem and returns its path.
    pub fn convert_beside(&self, csv: &Path) -> Result<PathBuf, Error> {
        let tbx = csv.with_extension("tbx");
        self.convert(csv, &tbx)?;
        Ok(tbx)
    }
}
