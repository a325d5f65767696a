//! Header analysis for Transifex glossary exports.
//!
//! The header row is classified once into a [`ColumnSpec`]: shared columns
//! (`term`, the dialect's comment column, `pos`) and one [`LanguageColumns`]
//! per language mentioned by a `translation_<lang>` or comment-prefixed column.

/// Prefix of the per-language translated term column.
pub const TRANSLATION_PREFIX: &str = "translation_";

/// Column indices for one language. `None` means the export has no such column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageColumns {
    pub term: Option<usize>,
    pub comment: Option<usize>,
}

/// Zero-based column indices derived from a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    pub term: Option<usize>,
    pub comment: Option<usize>,
    pub pos: Option<usize>,
    /// Languages in the order their first column appears in the header.
    pub languages: Vec<(String, LanguageColumns)>,
}

impl ColumnSpec {
    /// Classifies `headers` left to right.
    ///
    /// `comment_header` is the exact name of the shared comment column and
    /// `comment_prefix` the prefix of per-language comment columns (`comment`
    /// and `comment_` for glossary exports, `notes` and `notes_` for exports
    /// headed to Weblate). Unknown columns are ignored.
    pub fn analyze<I, S>(headers: I, comment_header: &str, comment_prefix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut spec = ColumnSpec::default();

        for (column, header) in headers.into_iter().enumerate() {
            let header = header.as_ref();
            if header == "term" {
                spec.term = Some(column);
            } else if header == comment_header {
                spec.comment = Some(column);
            } else if header == "pos" {
                spec.pos = Some(column);
            } else if let Some(language) = header.strip_prefix(TRANSLATION_PREFIX) {
                if let Some(columns) = spec.language_mut(language) {
                    columns.term = Some(column);
                }
            } else if let Some(language) = header.strip_prefix(comment_prefix) {
                if let Some(columns) = spec.language_mut(language) {
                    columns.comment = Some(column);
                }
            }
        }

        spec
    }

    /// Looks up the columns of `language`, if the header mentioned it.
    pub fn language(&self, language: &str) -> Option<&LanguageColumns> {
        self.languages
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, columns)| columns)
    }

    /// Language codes in discovery order.
    pub fn language_codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|(code, _)| code.as_str())
    }

    fn language_mut(&mut self, language: &str) -> Option<&mut LanguageColumns> {
        if language.is_empty() {
            return None;
        }
        let index = match self.languages.iter().position(|(code, _)| code == language) {
            Some(index) => index,
            None => {
                self.languages.push((language.to_string(), LanguageColumns::default()));
                self.languages.len() - 1
            }
        };
        Some(&mut self.languages[index].1)
    }
}

/// Reads `column` from `row`; an absent column or a short row reads as `""`.
pub fn cell<'a>(row: &'a csv::StringRecord, column: Option<usize>) -> &'a str {
    column.and_then(|index| row.get(index)).unwrap_or("")
}
