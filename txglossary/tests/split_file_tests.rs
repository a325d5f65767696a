use indoc::indoc;
use std::fs;
use tempfile::TempDir;
use txglossary::traits::Parser;
use txglossary::{Error, GlossaryRecord, Split, TranslationMemoryRecord};

#[test]
fn test_documented_example() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("glossary.csv");
    fs::write(
        &input,
        indoc! {"
            term,comment,translation_de,comment_de,translation_fr
            Cat,A feline,Katze,Ein Fellsäuger,Chat
        "},
    )
    .unwrap();

    let split = Split::<GlossaryRecord>::read_from(&input).unwrap();
    let out_dir = temp_dir.path().join("out");
    let written = split.write_all(&out_dir).unwrap();
    assert_eq!(written, vec![out_dir.join("de.csv"), out_dir.join("fr.csv")]);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(out_dir.join("de.csv"))
        .unwrap();
    let rows: Vec<Vec<String>> = rdr
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    assert_eq!(
        rows,
        vec![vec!["A feline\n\nEin Fellsäuger", "Cat", "Katze"]]
    );

    // fr has no comment_fr column; only the shared comment survives the trim
    let fr = fs::read_to_string(out_dir.join("fr.csv")).unwrap();
    assert_eq!(fr, "A feline,Cat,Chat\r\n");
}

#[test]
fn test_untranslated_language_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let split = Split::<TranslationMemoryRecord>::from_str(indoc! {"
        term,notes,translation_de,translation_fr,notes_fr
        Cat,,Katze,  ,chat?
        Dog,,Hund,,
    "})
    .unwrap();

    let written = split.write_all(temp_dir.path()).unwrap();
    assert_eq!(written, vec![temp_dir.path().join("de.csv")]);
    assert_eq!(split.buffer("fr").unwrap().len(), 2);
    assert!(!temp_dir.path().join("fr.csv").exists());
}

#[test]
fn test_hook_runs_per_written_file() {
    let temp_dir = TempDir::new().unwrap();
    let split = Split::<GlossaryRecord>::from_str(indoc! {"
        term,translation_de,translation_it,translation_ja
        Cat,Katze,Gatto,
    "})
    .unwrap();

    let mut seen = Vec::new();
    split
        .write_all_with(temp_dir.path(), |language, path| {
            assert!(path.exists());
            seen.push(language.to_string());
            Ok(())
        })
        .unwrap();
    assert_eq!(seen, vec!["de", "it"]);
}

#[test]
fn test_hook_error_stops_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let split = Split::<GlossaryRecord>::from_str(indoc! {"
        term,translation_de,translation_it
        Cat,Katze,Gatto
    "})
    .unwrap();

    let result = split.write_all_with(temp_dir.path(), |_, _| {
        Err(Error::InvalidPath("boom".to_string()))
    });
    assert!(result.is_err());
    assert!(temp_dir.path().join("de.csv").exists());
    assert!(!temp_dir.path().join("it.csv").exists());
}

#[test]
fn test_utf16_export_is_decoded() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("glossary.csv");
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "term,translation_de\nCat,Katze\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&input, bytes).unwrap();

    let split = Split::<GlossaryRecord>::read_from(&input).unwrap();
    assert_eq!(split.buffer("de").unwrap().records()[0].translation, "Katze");
    assert_eq!(split.columns().term, Some(0));
}

#[test]
fn test_missing_file() {
    let result = Split::<GlossaryRecord>::read_from("/nonexistent/glossary.csv");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_empty_file_names_the_path() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("empty.csv");
    fs::write(&input, "").unwrap();

    let result = Split::<GlossaryRecord>::read_from(&input);
    match result {
        Err(Error::MissingHeader(ref name)) => assert!(name.ends_with("empty.csv")),
        other => panic!("expected MissingHeader, got {:?}", other.map(|_| ())),
    }
}
