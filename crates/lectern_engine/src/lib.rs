//! Turn engine for Lectern.
//!
//! This crate provides:
//! - [`TurnSession`] - The session state machine (setup, turn loop,
//!   game over)
//! - [`Command`] and [`AnswerCommand`] - Reversible units of work with a
//!   once-only execute lifecycle
//! - [`CommandHistory`] - The undo stack
//! - [`ScoreBoard`] - Derived score cache keyed by player id
//! - [`QuestionPool`] - The remaining questions and the category board
//! - [`Console`] - The line-oriented boundary, with a scripted test
//!   double
//!
//! The engine owns all mutable game state for the duration of a session;
//! commands borrow it through a [`TurnContext`] one call at a time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod console;
pub mod history;
pub mod pool;
pub mod scoreboard;
pub mod turn;

pub use command::{AnswerCommand, Command, CommandState, TurnContext};
pub use console::{Console, ReadLine, ScriptedConsole};
pub use history::CommandHistory;
pub use pool::QuestionPool;
pub use scoreboard::{ScoreBoard, ScoreObserver};
pub use turn::{TurnPhase, TurnSession};
