// Integration tests for building an index from a book source tree

use crate::common::{build_test_book, create_test_services, doc_ids, TestBook};
use folio::core::types::DocumentId;

#[test]
fn test_build_small_book() {
    let book = TestBook::small();
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));

    let (index, stats) = build_test_book(&services, book.path());

    assert_eq!(stats.documents_indexed, 6);
    assert_eq!(stats.files_skipped, 0);
    assert!(stats.terms > 0);
    assert!(stats.title_terms > 0);

    let docnames: Vec<String> = index.snapshot().documents().map(|d| d.docname).collect();
    assert_eq!(
        docnames,
        vec![
            "PDEs/PDEs",
            "PDEs/PDEs-Poisson",
            "PDEs/PDEs-waves",
            "basiclinalg/bla-expressions",
            "intro",
            "notebooks",
        ]
    );
}

#[test]
fn test_titles_and_filenames() {
    let book = TestBook::small();
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));
    let (index, _) = build_test_book(&services, book.path());

    let poisson = index.document_info(DocumentId(1)).unwrap();
    assert_eq!(poisson.title, "Poisson Equation and the 5-point stencil");
    assert_eq!(poisson.filename, "PDEs/PDEs-Poisson.md");

    let notebook = index.document_info(DocumentId(5)).unwrap();
    assert_eq!(notebook.title, "Content with notebooks");
    assert_eq!(notebook.filename, "notebooks.ipynb");
}

#[test]
fn test_lookups_on_built_book() {
    let book = TestBook::small();
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));
    let (index, _) = build_test_book(&services, book.path());

    assert_eq!(doc_ids(&index.lookup("poisson")), vec![1]);
    assert_eq!(doc_ids(&index.lookup("stencil")), vec![1, 2]);
    assert_eq!(doc_ids(&index.lookup("templates")), vec![3]);
    assert_eq!(doc_ids(&index.lookup("grid")), vec![0, 1]);
    assert_eq!(doc_ids(&index.lookup("equations")), vec![0, 1, 2]);

    // Code blocks are searchable text
    assert_eq!(doc_ids(&index.lookup("size_t")), vec![1]);

    // Notebook code cells and outputs
    assert_eq!(doc_ids(&index.lookup("hello")), vec![5]);
    assert_eq!(doc_ids(&index.lookup("print")), vec![5]);
}

#[test]
fn test_excluded_and_hidden_sources_not_indexed() {
    let book = TestBook::small();
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));
    let (index, _) = build_test_book(&services, book.path());

    assert!(index.lookup("obsolete").is_empty());
    assert!(index.lookup("stale").is_empty());
    assert!(index
        .snapshot()
        .documents()
        .all(|d| !d.filename.contains("checkpoint")));
}

#[test]
fn test_front_matter_not_indexed() {
    let book = TestBook::small();
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));
    let (index, _) = build_test_book(&services, book.path());

    assert!(index.lookup("jupytext").is_empty());
    assert!(index.lookup("myst").is_empty());
}

#[test]
fn test_custom_include_patterns() {
    let book = TestBook::small();
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));

    let (index, stats) = services
        .create_pipeline(vec!["PDEs/*.md".to_string()], vec![])
        .unwrap()
        .build_directory(book.path())
        .unwrap();

    assert_eq!(stats.documents_indexed, 3);
    assert!(index.lookup("templates").is_empty());
}

#[test]
fn test_untitled_file_uses_stem() {
    let book = TestBook::with_files(&[("notes/scratch.txt", "loose notes without a heading")]);
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));

    let (index, _) = build_test_book(&services, book.path());

    let info = index.document_info(DocumentId(0)).unwrap();
    assert_eq!(info.docname, "notes/scratch");
    assert_eq!(info.title, "scratch");
}

#[test]
fn test_build_missing_directory() {
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));

    let result = services
        .create_pipeline(vec![], vec![])
        .unwrap()
        .build_directory(&out.path().join("does-not-exist"));

    assert!(result.is_err());
}
