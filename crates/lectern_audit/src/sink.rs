//! Audit sinks.
//!
//! A sink consumes events and never hands them back: the game core is
//! write-only against the audit trail. The CSV sink keeps a process-mining
//! friendly layout with one fixed header and nine columns per row.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::SecondsFormat;
use lectern_core::{Error, Result};

use crate::event::AuditEvent;

/// The fixed CSV column schema.
pub const CSV_HEADER: &str =
    "Case_ID,Player_ID,Activity,Timestamp,Category,Question_Value,Answer_Given,Result,Score_After_Play";

/// Append-only consumer of audit events.
pub trait AuditSink {
    /// Records one event.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying medium rejects the write.
    fn record(&mut self, event: &AuditEvent) -> Result<()>;
}

// =============================================================================
// CSV Sink
// =============================================================================

/// File-backed CSV sink.
///
/// Opens in append mode and writes the header only when the file is new or
/// empty, so multiple sessions can share one log without corrupting it.
/// Every row is flushed as it is written; a crash loses at most the
/// in-flight event.
pub struct CsvAuditSink {
    file: File,
    path: PathBuf,
}

impl CsvAuditSink {
    /// Opens (or creates) the log file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or the header
    /// cannot be written.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::io(format!("failed to open log '{}': {e}", path.display())))?;

        let needs_header = file.metadata().map_or(true, |m| m.len() == 0);
        if needs_header {
            writeln!(file, "{CSV_HEADER}").map_err(|e| {
                Error::io(format!("failed to write log header '{}': {e}", path.display()))
            })?;
        }

        Ok(Self { file, path })
    }

    /// Returns the log file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for CsvAuditSink {
    fn record(&mut self, event: &AuditEvent) -> Result<()> {
        let row = csv_row(event);
        writeln!(self.file, "{row}").map_err(|e| {
            Error::io(format!(
                "failed to append to log '{}': {e}",
                self.path.display()
            ))
        })?;
        self.file.flush().map_err(|e| {
            Error::io(format!("failed to flush log '{}': {e}", self.path.display()))
        })
    }
}

/// Renders one event as a nine-column row.
///
/// Free-text cells have commas replaced so the column count stays fixed
/// for downstream splitting.
fn csv_row(event: &AuditEvent) -> String {
    let session = clean_cell(&event.session_id);
    let player = event.player.map(|p| p.to_string()).unwrap_or_default();
    let activity = event.activity.tag();
    let timestamp = event
        .timestamp
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    let category = clean_cell(event.category.as_deref().unwrap_or(""));
    let value = event.value.map(|v| v.to_string()).unwrap_or_default();
    let answer = clean_cell(event.answer.as_deref().unwrap_or(""));
    let result = event.result.map(|r| r.tag().to_string()).unwrap_or_default();
    let score = event.score_after;

    format!(
        "{session},{player},{activity},{timestamp},{category},{value},{answer},{result},{score}"
    )
}

fn clean_cell(text: &str) -> String {
    text.replace(',', ";").replace(['\n', '\r'], " ")
}

// =============================================================================
// Memory Sink
// =============================================================================

/// In-memory sink for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Vec<AuditEvent>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// Returns how many events with the given activity tag were recorded.
    #[must_use]
    pub fn count_of(&self, tag: &str) -> usize {
        self.events
            .iter()
            .filter(|e| e.activity.tag() == tag)
            .count()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&mut self, event: &AuditEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
