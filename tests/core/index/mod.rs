//! Index layer tests
//!
//! Snapshot loading and validation, plus the properties every index
//! must satisfy regardless of how it was produced.
