//! Session assembly for the interactive binary.
//!
//! Wires the parser, engine, and audit sink together from a small
//! configuration: where to read questions, where to append the audit log,
//! and where to write end-of-game reports.

use std::path::PathBuf;

use lectern_audit::{CsvAuditSink, SessionReport, new_session_id};
use lectern_core::Result;
use lectern_engine::TurnSession;
use lectern_parser::load_questions;

use crate::console::RustylineConsole;

/// Default question resource, shipped with the workspace.
pub const DEFAULT_QUESTION_FILE: &str = "data/questions.xml";

/// Default audit log path, appended to across sessions.
pub const DEFAULT_LOG_FILE: &str = "game_log.csv";

/// Configuration for one interactive game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Question resource to load (`.csv`, `.json`, or `.xml`).
    question_file: PathBuf,

    /// Audit log the session appends to.
    log_path: PathBuf,

    /// Directory end-of-game reports are written into.
    report_dir: PathBuf,
}

impl SessionConfig {
    /// Creates a configuration with the default file locations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            question_file: PathBuf::from(DEFAULT_QUESTION_FILE),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            report_dir: PathBuf::from("."),
        }
    }

    /// Sets the question resource to load.
    #[must_use]
    pub fn with_question_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.question_file = path.into();
        self
    }

    /// Sets the audit log path.
    #[must_use]
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Sets the directory reports are written into.
    #[must_use]
    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = dir.into();
        self
    }

    /// Returns the question resource path.
    #[must_use]
    pub fn question_file(&self) -> &PathBuf {
        &self.question_file
    }

    /// Returns the audit log path.
    #[must_use]
    pub fn log_path(&self) -> &PathBuf {
        &self.log_path
    }

    /// Returns the report output directory.
    #[must_use]
    pub fn report_dir(&self) -> &PathBuf {
        &self.report_dir
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one full interactive game session.
///
/// Loads the configured question resource, opens the audit log, and drives
/// a [`TurnSession`] over a terminal console until the game ends. Returns
/// the assembled session report (also written to the report directory).
///
/// # Errors
///
/// Returns an error if the question resource cannot be loaded, the audit
/// log cannot be opened, or the session fails mid-game.
pub fn run_session(config: &SessionConfig) -> Result<SessionReport> {
    let questions = load_questions(config.question_file())?;
    let mut sink = CsvAuditSink::open(config.log_path())?;
    let console = RustylineConsole::new()?;

    let mut session = TurnSession::new(new_session_id(), console, questions)
        .with_report_dir(config.report_dir());
    session.run(&mut sink)
}
