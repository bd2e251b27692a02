//! Command history.
//!
//! A push/pop stack of executed commands. The top is always the most
//! recently executed, not-yet-undone command; undoing pops it, and there
//! is no redo.

use lectern_core::Result;

use crate::command::{Command, TurnContext};

/// Stack of executed commands.
#[derive(Default)]
pub struct CommandHistory {
    stack: Vec<Box<dyn Command>>,
}

impl CommandHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of executed, not-yet-undone commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if nothing is undoable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Describes the command that would be undone next.
    #[must_use]
    pub fn last_description(&self) -> Option<String> {
        self.stack.last().map(|cmd| cmd.describe())
    }

    /// Executes the command and pushes it onto the stack.
    ///
    /// A command that fails to execute is not pushed.
    ///
    /// # Errors
    ///
    /// Propagates the command's execution failure.
    pub fn execute_command(
        &mut self,
        mut command: Box<dyn Command>,
        ctx: &mut TurnContext<'_>,
    ) -> Result<()> {
        command.execute(ctx)?;
        self.stack.push(command);
        Ok(())
    }

    /// Pops and undoes the most recent command.
    ///
    /// Returns `true` if a command was undone, `false` if the history was
    /// empty.
    ///
    /// # Errors
    ///
    /// Propagates the command's undo failure; the command is still
    /// removed from the stack.
    pub fn undo_last(&mut self, ctx: &mut TurnContext<'_>) -> Result<bool> {
        match self.stack.pop() {
            Some(mut command) => {
                command.undo(ctx)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
