use proptest::prelude::*;
use txglossary::traits::Parser;
use txglossary::{GlossaryRecord, Split, TranslationMemoryRecord};

/// Cells without separators or quotes, padded with random whitespace.
fn cell() -> impl Strategy<Value = String> {
    ("[ \t]{0,2}", "[a-zA-Zäöü]{0,6}", "[ \t]{0,2}").prop_map(|(l, v, r)| format!("{}{}{}", l, v, r))
}

fn export(languages: &[String], rows: &[Vec<String>]) -> String {
    let mut header = vec!["term".to_string(), "comment".to_string()];
    for lang in languages {
        header.push(format!("translation_{}", lang));
        header.push(format!("comment_{}", lang));
    }

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&header).unwrap();
    for row in rows {
        wtr.write_record(row).unwrap();
    }
    String::from_utf8(wtr.into_inner().unwrap()).unwrap()
}

fn table() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    prop::collection::btree_set("[a-z]{2}", 1..4).prop_flat_map(|languages| {
        let languages: Vec<String> = languages.into_iter().collect();
        let width = 2 + 2 * languages.len();
        let rows = prop::collection::vec(prop::collection::vec(cell(), width), 1..12);
        (Just(languages), rows)
    })
}

proptest! {
    #[test]
    fn prop_one_buffer_per_language_with_every_row((languages, rows) in table()) {
        let split = Split::<GlossaryRecord>::from_str(&export(&languages, &rows)).unwrap();
        prop_assert!(split.buffers().len() <= languages.len());
        for buffer in split.buffers() {
            prop_assert_eq!(buffer.len(), rows.len());
        }
    }

    #[test]
    fn prop_row_order_and_trimming((languages, rows) in table()) {
        let split = Split::<GlossaryRecord>::from_str(&export(&languages, &rows)).unwrap();
        for (lang_index, lang) in languages.iter().enumerate() {
            let buffer = split.buffer(lang).unwrap();
            for (row, record) in rows.iter().zip(buffer.records()) {
                prop_assert_eq!(&record.term, row[0].trim());
                prop_assert_eq!(&record.translation, row[2 + 2 * lang_index].trim());
                prop_assert_eq!(record.term.trim(), record.term.as_str());
                prop_assert_eq!(record.comment.trim(), record.comment.as_str());
            }
        }
    }

    #[test]
    fn prop_translation_memory_row_order((languages, rows) in table()) {
        let split = Split::<TranslationMemoryRecord>::from_str(
            &export(&languages, &rows).replacen("comment", "notes", 1),
        )
        .unwrap();
        // Only `translation_*` columns count for this dialect; `comment_*` is ignored
        for (lang_index, lang) in languages.iter().enumerate() {
            let buffer = split.buffer(lang).unwrap();
            let targets: Vec<_> = buffer.records().iter().map(|r| r.target.clone()).collect();
            let expected: Vec<_> = rows.iter().map(|r| r[2 + 2 * lang_index].trim().to_string()).collect();
            prop_assert_eq!(targets, expected);
            prop_assert!(buffer.records().iter().all(|r| r.translator_comments.is_empty()));
        }
    }

    #[test]
    fn prop_written_iff_some_translation((languages, rows) in table()) {
        let split = Split::<GlossaryRecord>::from_str(&export(&languages, &rows)).unwrap();
        let dir = tempfile::TempDir::new().unwrap();
        split.write_all(dir.path()).unwrap();
        for (lang_index, lang) in languages.iter().enumerate() {
            let translated = rows.iter().any(|r| !r[2 + 2 * lang_index].trim().is_empty());
            prop_assert_eq!(dir.path().join(format!("{}.csv", lang)).exists(), translated);
        }
    }
}
