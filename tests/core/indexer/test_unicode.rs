// Non-ASCII words survive tokenization, storage and lookup

use crate::common::{build_test_book, create_test_services, doc_ids, TestBook};
use folio::core::config::SnapshotFormat;
use folio::core::index::InvertedIndex;
use folio::core::indexer::Tokenizer;
use folio::core::types::DocumentId;

fn unicode_book() -> TestBook {
    TestBook::with_files(&[
        (
            "authors.md",
            "# Authors\n\nJoachim Schöberl wrote ngbla. Ångström units appear in the café.\n",
        ),
        ("greek.md", "# Greek letters\n\nThe Laplacian Δu and the wave speed ω.\n"),
        ("japanese.md", "# 日本語\n\nあ ありがとう 数値計算\n"),
        ("emoji.md", "# Emoji 🚀\n\nrocket 🚀 launch\n"),
    ])
}

#[test]
fn test_accented_words() {
    let book = unicode_book();
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));
    let (index, _) = build_test_book(&services, book.path());

    // authors(0) emoji(1) greek(2) japanese(3)
    assert_eq!(doc_ids(&index.lookup("Schöberl")), vec![0]);
    assert_eq!(doc_ids(&index.lookup("café")), vec![0]);
    assert_eq!(doc_ids(&index.lookup("ångström")), vec![0]);
}

#[test]
fn test_non_latin_scripts() {
    let book = unicode_book();
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));
    let (index, _) = build_test_book(&services, book.path());

    assert_eq!(doc_ids(&index.lookup("Δu")), vec![2]);
    assert_eq!(doc_ids(&index.lookup("ω")), vec![2]);
    assert_eq!(doc_ids(&index.lookup("数値計算")), vec![3]);
    assert_eq!(doc_ids(&index.lookup("ありがとう")), vec![3]);

    // Single Hiragana characters are not indexed
    assert!(index.lookup("あ").is_empty());
}

#[test]
fn test_emoji_is_a_separator() {
    let book = unicode_book();
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));
    let (index, _) = build_test_book(&services, book.path());

    assert_eq!(doc_ids(&index.lookup("rocket")), vec![1]);
    assert_eq!(doc_ids(&index.lookup("emoji")), vec![1]);
    assert!(index.lookup("🚀").is_empty());
}

#[test]
fn test_unicode_round_trip() {
    let book = unicode_book();
    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("searchindex.js");
    let services = create_test_services(&path);
    let (index, _) = build_test_book(&services, book.path());

    index.save(&path, SnapshotFormat::Js).unwrap();
    let reloaded = InvertedIndex::load(&path, Tokenizer::english()).unwrap();

    for word in ["Schöberl", "Δu", "数値計算", "ありがとう"] {
        assert_eq!(index.lookup(word), reloaded.lookup(word), "word '{word}'");
    }
    assert_eq!(reloaded.document_info(DocumentId(3)).unwrap().title, "日本語");
}
