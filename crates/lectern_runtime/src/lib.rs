//! Console front end and session assembly for Lectern.
//!
//! This crate provides:
//! - [`RustylineConsole`] - Terminal console with line editing and history
//! - [`SessionConfig`] and [`run_session`] - Wiring from file locations to
//!   a finished game
//! - The `lectern` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod console;
pub mod session;

pub use console::RustylineConsole;
pub use session::{DEFAULT_LOG_FILE, DEFAULT_QUESTION_FILE, SessionConfig, run_session};
