//! Splitting a wide glossary export into one buffer per language.
//!
//! [`Split`] reads the header once, then turns every data row into one
//! record per language. Buffers are created when a language receives its
//! first row and keep the input row order. Nothing is deduplicated.

use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use csv::StringRecord;
use tracing::{debug, info, trace};

use crate::{
    columns::ColumnSpec,
    error::Error,
    formats::{OutputRecord, writer_builder},
    traits::{Parser, Writer},
};

/// All records assigned to one language, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageBuffer<R> {
    language: String,
    records: Vec<R>,
}

impl<R: OutputRecord> LanguageBuffer<R> {
    /// Creates an empty buffer for `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            records: Vec::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any record carries a non-empty translation.
    ///
    /// A buffer full of untranslated rows is not worth a file; the dialect's
    /// header row never counts.
    pub fn has_translations(&self) -> bool {
        self.records
            .iter()
            .any(|record| !record.translation().is_empty())
    }

    /// Output file name for this language, e.g. `pt_BR.csv`.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.language)
    }
}

impl<R: OutputRecord> Writer for LanguageBuffer<R> {
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = writer_builder::<R>().from_writer(writer);
        if let Some(header) = R::HEADER {
            wtr.write_record(header)?;
        }
        for record in &self.records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// A glossary export split into per-language buffers of `R` records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<R> {
    columns: ColumnSpec,
    buffers: Vec<LanguageBuffer<R>>,
}

impl<R: OutputRecord> Split<R> {
    /// Splits `rows` according to the classified `headers`.
    pub fn split<H, I>(headers: H, rows: I) -> Result<Self, Error>
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        I: IntoIterator<Item = Result<StringRecord, csv::Error>>,
    {
        let columns = ColumnSpec::analyze(headers, R::COMMENT_HEADER, R::COMMENT_PREFIX);
        debug!(
            dialect = R::NAME,
            languages = columns.languages.len(),
            "Analyzed header"
        );

        let mut split = Split {
            columns,
            buffers: Vec::new(),
        };
        for row in rows {
            split.push_row(&row?);
        }
        Ok(split)
    }

    fn push_row(&mut self, row: &StringRecord) {
        for (index, (language, columns)) in self.columns.languages.iter().enumerate() {
            trace!(language = %language, term = ?columns.term, comment = ?columns.comment, "Splitting row");
            let record = R::from_row(row, &self.columns, columns);
            // Languages are discovered up front, so buffer `index` exists once
            // the first row has been pushed.
            if index == self.buffers.len() {
                self.buffers.push(LanguageBuffer::new(language.clone()));
            }
            self.buffers[index].push(record);
        }
    }

    pub fn columns(&self) -> &ColumnSpec {
        &self.columns
    }

    /// Buffers in header discovery order.
    pub fn buffers(&self) -> &[LanguageBuffer<R>] {
        &self.buffers
    }

    pub fn buffer(&self, language: &str) -> Option<&LanguageBuffer<R>> {
        self.buffers
            .iter()
            .find(|buffer| buffer.language == language)
    }

    /// Writes `<out_dir>/<lang>.csv` for every language with translations.
    pub fn write_all<P: AsRef<Path>>(&self, out_dir: P) -> Result<Vec<PathBuf>, Error> {
        self.write_all_with(out_dir, |_, _| Ok(()))
    }

    /// Like [`Split::write_all`], calling `after_write(language, path)` once
    /// each file is on disk. An error from the hook stops the run.
    pub fn write_all_with<P, F>(&self, out_dir: P, mut after_write: F) -> Result<Vec<PathBuf>, Error>
    where
        P: AsRef<Path>,
        F: FnMut(&str, &Path) -> Result<(), Error>,
    {
        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir)?;

        let mut written = Vec::new();
        for buffer in &self.buffers {
            if !buffer.has_translations() {
                debug!(language = buffer.language(), "Skipping language without translations");
                continue;
            }
            let path = out_dir.join(buffer.file_name());
            buffer.write_to(&path)?;
            info!(
                language = buffer.language(),
                rows = buffer.len(),
                path = %path.display(),
                "Wrote {} file",
                R::NAME
            );
            after_write(buffer.language(), &path)?;
            written.push(path);
        }
        Ok(written)
    }
}

impl<R: OutputRecord> Parser for Split<R> {
    /// Parse a header row followed by data rows of the same arity.
    fn from_reader<B: BufRead>(reader: B) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);
        let mut records = rdr.records();

        let headers = match records.next() {
            Some(headers) => headers?,
            None => return Err(Error::MissingHeader("glossary export".to_string())),
        };
        Self::split(&headers, records)
    }
}
