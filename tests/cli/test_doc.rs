//! Tests for doc CLI command

use crate::cli::test_helpers::create_cli_test_services;
use crate::common::sample_snapshot_path;
use folio::cli::commands::doc::{execute, DocArgs};
use folio::cli::OutputFormat;

#[tokio::test]
async fn test_doc_human() {
    let (services, _temp) = create_cli_test_services();

    let args = DocArgs {
        id: 1,
        index: Some(sample_snapshot_path()),
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Doc should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_doc_json() {
    let (services, _temp) = create_cli_test_services();

    let args = DocArgs {
        id: 0,
        index: Some(sample_snapshot_path()),
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Doc should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_doc_out_of_range() {
    let (services, _temp) = create_cli_test_services();

    let args = DocArgs {
        id: 99,
        index: Some(sample_snapshot_path()),
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("99"));
}
