// Integration tests for search functionality

use crate::common::{build_test_book, create_test_services, sample_snapshot_path, TestBook};
use folio::core::config::{Config, SnapshotFormat, TokenizerConfig};
use folio::core::index::InvertedIndex;
use folio::core::indexer::Tokenizer;
use folio::core::services::Services;
use folio::core::types::{SearchResponse, SourceDocument};
use std::sync::Arc;

fn hit_ids(response: &SearchResponse) -> Vec<u32> {
    response.hits.iter().map(|h| h.document.id.0).collect()
}

#[test]
fn test_search_sample_snapshot() {
    let services = create_test_services(&sample_snapshot_path());
    let index = services.open_index(None).expect("Sample snapshot should load");
    let search = services.search_service(index);

    let response = search.search("equation stencil", None).unwrap();
    assert_eq!(hit_ids(&response), vec![0, 1]);
    assert_eq!(response.words, vec!["equat", "stencil"]);
    assert!(response.hits.iter().all(|h| h.title_match));

    let response = search.search("lazy evaluation", None).unwrap();
    assert_eq!(hit_ids(&response), vec![2]);
    assert!(!response.hits[0].title_match);
}

#[test]
fn test_search_built_book() {
    let book = TestBook::small();
    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("searchindex.js");
    let services = create_test_services(&path);

    let (index, _) = build_test_book(&services, book.path());
    index.save(&path, SnapshotFormat::Js).unwrap();

    let search = services.search_service(services.open_index(None).unwrap());

    let response = search.search("stencil grid", None).unwrap();
    assert_eq!(hit_ids(&response), vec![1]);
    assert_eq!(response.hits[0].document.docname, "PDEs/PDEs-Poisson");

    let response = search.search("equations -poisson", None).unwrap();
    assert_eq!(hit_ids(&response), vec![0, 2]);
}

#[test]
fn test_search_shared_index() {
    let book = TestBook::small();
    let out = tempfile::tempdir().unwrap();
    let services = create_test_services(&out.path().join("searchindex.js"));
    let (index, _) = build_test_book(&services, book.path());

    let search = Arc::new(services.search_service(Arc::new(index)));

    let handles: Vec<_> = ["poisson", "templates", "notebooks"]
        .into_iter()
        .map(|query| {
            let search = Arc::clone(&search);
            std::thread::spawn(move || search.search(query, None).map(|r| r.total))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 1);
    }
}

#[test]
fn test_search_limit_clamped() {
    let mut config = Config::default();
    config.output.path = sample_snapshot_path();
    config.search.default_limit = 1;
    config.search.max_limit = 1;
    let services = Services::new(config);

    let search = services.search_service(services.open_index(None).unwrap());

    let response = search.search("grid", Some(50)).unwrap();
    assert_eq!(response.hits.len(), 1);
    assert_eq!(response.total, 2);
}

#[test]
fn test_search_invalid_queries() {
    let services = create_test_services(&sample_snapshot_path());
    let search = services.search_service(services.open_index(None).unwrap());

    assert!(search.search("", None).unwrap_err().is_bad_request());

    let long_query = "stencil ".repeat(100);
    assert!(search.search(&long_query, None).unwrap_err().is_bad_request());
}

#[test]
fn test_search_unstemmed_index() {
    let corpus = vec![
        SourceDocument::from_filename("PDEs.md", "poisson equation stencil"),
        SourceDocument::from_filename("bla.md", "expression templates"),
    ];
    let unstemmed = Tokenizer::new(&TokenizerConfig {
        stem: false,
        ..TokenizerConfig::default()
    })
    .unwrap();
    let built = InvertedIndex::build(&corpus, unstemmed).unwrap();

    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("searchindex.js");
    built.save(&path, SnapshotFormat::Js).unwrap();

    // Queried with the default stemming tokenizer
    let services = create_test_services(&path);
    let search = services.search_service(services.open_index(None).unwrap());

    let index = services.open_index(None).unwrap();
    assert_eq!(index.lookup("templates").len(), 1);

    let response = search.search("templates", None).unwrap();
    assert_eq!(hit_ids(&response), vec![1]);
    assert_eq!(response.total, 1);

    let response = search.search("Poisson equation", None).unwrap();
    assert_eq!(hit_ids(&response), vec![0]);

    let response = search.search("stencil -poisson", None).unwrap();
    assert!(response.hits.is_empty());
}
