//! Language codes as Weblate expects them.
//!
//! Local file names follow the Transifex conventions (`nb.po`, `zh-TW.po`);
//! a few of those differ from the codes Weblate uses.

use std::{collections::HashMap, path::Path};

use lazy_static::lazy_static;

lazy_static! {
    /// Local code -> Weblate code, applied after hyphens became underscores.
    pub static ref LANGUAGE_MAP: HashMap<&'static str, &'static str> = HashMap::from([
        ("ms_MY", "ms"),
        ("nb", "nb_NO"),
        ("zh_TW", "zh_Hant"),
    ]);
}

/// Maps a local language code to the code Weblate knows it under.
///
/// ```rust
/// use txglossary::weblate_language_code;
/// assert_eq!(weblate_language_code("zh-TW"), "zh_Hant");
/// assert_eq!(weblate_language_code("pt-BR"), "pt_BR");
/// ```
pub fn weblate_language_code(code: &str) -> String {
    let code = code.replace('-', "_");
    match LANGUAGE_MAP.get(code.as_str()) {
        Some(mapped) => mapped.to_string(),
        None => code,
    }
}

/// The language code a file is named after: its file stem (`de.po` -> `de`).
pub fn language_from_path<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remapped_codes() {
        assert_eq!(weblate_language_code("ms_MY"), "ms");
        assert_eq!(weblate_language_code("nb"), "nb_NO");
        assert_eq!(weblate_language_code("zh_TW"), "zh_Hant");
    }

    #[test]
    fn test_hyphens_normalized_before_lookup() {
        assert_eq!(weblate_language_code("zh-TW"), "zh_Hant");
        assert_eq!(weblate_language_code("ms-MY"), "ms");
        assert_eq!(weblate_language_code("sr-Latn"), "sr_Latn");
    }

    #[test]
    fn test_other_codes_pass_through() {
        assert_eq!(weblate_language_code("de"), "de");
        assert_eq!(weblate_language_code("nb_NO"), "nb_NO");
        assert_eq!(weblate_language_code("zh_CN"), "zh_CN");
    }

    #[test]
    fn test_language_from_path() {
        assert_eq!(language_from_path("out/nb.po").as_deref(), Some("nb"));
        assert_eq!(language_from_path("zh-TW.csv").as_deref(), Some("zh-TW"));
        assert_eq!(language_from_path("de").as_deref(), Some("de"));
        assert_eq!(language_from_path("/").as_deref(), None);
    }
}
