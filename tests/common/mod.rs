// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{sample_snapshot_path, TestBook};
#[allow(unused_imports)]
pub use helpers::{build_test_book, create_test_services, doc_ids};
