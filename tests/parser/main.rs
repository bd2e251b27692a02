//! Integration tests for the lectern_parser crate.
//!
//! Tests for question ingestion through the public API:
//! - Loading and suffix dispatch
//! - The shipped sample resources
//! - Cross-format agreement between CSV, JSON, and XML

mod formats;
mod loading;
