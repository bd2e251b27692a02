//! The active question pool.
//!
//! Holds the questions not yet answered this session, in load order.
//! Selection is case-insensitive on category and exact on value; a
//! duplicate (category, value) pair resolves to the first match in load
//! order.

use std::fmt::Write;

use lectern_core::Question;

/// Remaining questions for one session.
#[derive(Clone, Debug, Default)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    /// Creates a pool over the given questions, preserving their order.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Returns the number of remaining questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` if every question has been answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterates the remaining questions in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Finds the first remaining question matching the selection.
    #[must_use]
    pub fn find(&self, category: &str, value: u32) -> Option<&Question> {
        self.questions
            .iter()
            .find(|q| q.matches_selection(category, value))
    }

    /// Removes and returns the first remaining question matching the
    /// selection.
    pub fn remove(&mut self, category: &str, value: u32) -> Option<Question> {
        let index = self
            .questions
            .iter()
            .position(|q| q.matches_selection(category, value))?;
        Some(self.questions.remove(index))
    }

    /// Renders the remaining questions grouped by category.
    ///
    /// Categories appear in first-encounter order, names left-padded to a
    /// 25-column field, followed by that category's values sorted
    /// ascending, each right-aligned 4 wide. Every row is followed by a
    /// blank line.
    #[must_use]
    pub fn render_board(&self) -> String {
        let mut grouped: Vec<(&str, Vec<u32>)> = Vec::new();
        for question in &self.questions {
            match grouped.iter_mut().find(|(c, _)| *c == question.category()) {
                Some((_, values)) => values.push(question.value()),
                None => grouped.push((question.category(), vec![question.value()])),
            }
        }

        let mut out = String::from("-------------- AVAILABLE QUESTIONS --------------\n");
        for (category, mut values) in grouped {
            values.sort_unstable();
            let mut row = String::new();
            for value in values {
                let _ = write!(row, "{value:>4}");
            }
            let _ = write!(out, "\n {category:<25} : {row}\n");
        }
        out.pop();
        out
    }
}
