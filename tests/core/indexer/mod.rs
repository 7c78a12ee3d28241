//! Indexer layer tests
//!
//! Building indexes from book source trees: file selection, title
//! extraction, notebooks and non-ASCII words.

mod test_book;
mod test_unicode;
