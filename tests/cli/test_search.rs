//! Tests for search CLI command

use crate::cli::test_helpers::{create_cli_test_services, setup_built_index};
use folio::cli::commands::search::{execute, SearchArgs};
use folio::cli::OutputFormat;

fn search_args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        index: None,
        limit: None,
        files_only: false,
    }
}

#[tokio::test]
async fn test_search_valid_query_human() {
    let (services, _temp) = create_cli_test_services();
    let (_book, _path) = setup_built_index(&services);

    let result = execute(search_args("wave equation"), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_search_valid_query_json() {
    let (services, _temp) = create_cli_test_services();
    let (_book, _path) = setup_built_index(&services);

    let result = execute(search_args("equations -poisson"), &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "JSON search should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_search_files_only_with_limit() {
    let (services, _temp) = create_cli_test_services();
    let (_book, _path) = setup_built_index(&services);

    let mut args = search_args("equations");
    args.files_only = true;
    args.limit = Some(1);

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_search_empty_results() {
    let (services, _temp) = create_cli_test_services();
    let (_book, _path) = setup_built_index(&services);

    let result = execute(search_args("nonexistent"), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Empty results are not an error");
}

#[tokio::test]
async fn test_search_empty_query() {
    let (services, _temp) = create_cli_test_services();
    let (_book, _path) = setup_built_index(&services);

    let result = execute(search_args("   "), &services, OutputFormat::Human).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid query"));
}
