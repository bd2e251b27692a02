//! Audit trail and session reporting for Lectern.
//!
//! This crate provides:
//! - [`AuditEvent`] - Structured game events with a fixed column schema
//! - [`AuditSink`] - The append-only event consumer, with CSV and
//!   in-memory implementations
//! - [`SessionReport`] - The structured end-of-game summary
//! - [`ReportFormatter`] - Rendering strategies (text and JSON)
//!
//! The audit trail is append-only: undoing a command never retracts an
//! event that was already recorded.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod event;
pub mod report;
pub mod sink;

pub use event::{Activity, AnswerResult, AuditEvent};
pub use report::{
    JsonFormatter, PlayerStanding, ReportFormatter, SessionReport, TextFormatter, TurnRecord,
    write_reports,
};
pub use sink::{AuditSink, CsvAuditSink, MemoryAuditSink};

/// Generates a fresh session id of the form `GAME-<millis-since-epoch>`.
#[must_use]
pub fn new_session_id() -> String {
    format!("GAME-{}", chrono::Utc::now().timestamp_millis())
}
