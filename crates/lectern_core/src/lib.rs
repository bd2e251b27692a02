//! Core entities and error types for Lectern.
//!
//! This crate provides:
//! - [`Question`] - A single multiple-choice question with ordered options
//! - [`Player`] - A contestant with a stable id and a signed score
//! - [`Roster`] - The ordered player list for one session
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod player;
pub mod question;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use player::{Player, PlayerId, Roster};
pub use question::{Options, Question};
