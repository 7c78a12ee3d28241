//! Tests for show-config CLI command

use crate::cli::test_helpers::create_cli_test_services;
use folio::cli::commands::config::{execute, ConfigArgs};
use folio::cli::OutputFormat;

#[tokio::test]
async fn test_config_human() {
    let (services, _temp) = create_cli_test_services();

    let result = execute(ConfigArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_config_json() {
    let (services, _temp) = create_cli_test_services();

    let result = execute(ConfigArgs {}, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}
