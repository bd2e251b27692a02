//! Lectern - Turn-based multiplayer quiz game
//!
//! This crate re-exports all layers of the Lectern system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: lectern_runtime — Terminal console, session assembly, CLI
//! Layer 2: lectern_engine  — Turn loop, commands, undo, score board
//!          lectern_audit   — Audit events, CSV log, session reports
//! Layer 1: lectern_parser  — CSV/JSON/XML question ingestion
//! Layer 0: lectern_core    — Players, questions, error types
//! ```

pub use lectern_audit as audit;
pub use lectern_core as core;
pub use lectern_engine as engine;
pub use lectern_parser as parser;
pub use lectern_runtime as runtime;
