//! Cross-layer integration tests for Lectern.
//!
//! Tests that verify correct interaction between multiple crates:
//! parsed question files driving full sessions, the on-disk audit log,
//! and end-of-game report rendering.

mod audit_log;
mod full_game;
mod reports;
