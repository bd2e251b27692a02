//! Integration tests for the lectern_engine crate.
//!
//! Tests that drive whole sessions through the public API:
//! - Scripted gameplay against the shipped question sets
//! - Undo across the command history with a real on-disk audit log

mod undo;
