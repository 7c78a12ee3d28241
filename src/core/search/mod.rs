//! Multi-word search over a loaded index.
//!
//! No scoring: a query selects documents, it does not rank them.

mod query;
mod service;

pub use query::{parse_query, ParsedQuery, QueryWord};
pub use service::SearchService;
