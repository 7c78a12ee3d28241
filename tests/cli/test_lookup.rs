//! Tests for lookup CLI command

use crate::cli::test_helpers::{create_cli_test_services, setup_built_index};
use crate::common::sample_snapshot_path;
use folio::cli::commands::lookup::{execute, LookupArgs};
use folio::cli::OutputFormat;

#[tokio::test]
async fn test_lookup_human() {
    let (services, _temp) = create_cli_test_services();
    let (_book, _path) = setup_built_index(&services);

    let args = LookupArgs {
        term: "stencil".to_string(),
        index: None,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Lookup should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_lookup_json_explicit_index() {
    let (services, _temp) = create_cli_test_services();

    let args = LookupArgs {
        term: "Templates".to_string(),
        index: Some(sample_snapshot_path()),
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Lookup should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_lookup_absent_term() {
    let (services, _temp) = create_cli_test_services();
    let (_book, _path) = setup_built_index(&services);

    let args = LookupArgs {
        term: "nonexistent".to_string(),
        index: None,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Absent term is not an error");
}

#[tokio::test]
async fn test_lookup_missing_index() {
    let (services, _temp) = create_cli_test_services();

    let args = LookupArgs {
        term: "stencil".to_string(),
        index: None,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_err(), "No index has been built yet");
}
