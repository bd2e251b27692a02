//! Multiple-choice question entities.
//!
//! Questions are created by the parsers at load time and are immutable
//! during play apart from administrative field correction. The (category,
//! value) pair is the sole lookup key during selection.

use std::fmt;

/// Ordered option mapping for one question.
///
/// Keys are unique within a question; insertion order is preserved so the
/// options render in the order the source file declared them. Inserting an
/// existing key replaces its text in place without moving it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    entries: Vec<(String, String)>,
}

impl Options {
    /// Creates an empty option mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts an option, replacing the text in place if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        let text = text.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = text;
        } else {
            self.entries.push((key, text));
        }
    }

    /// Returns the option text for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no options are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over (key, text) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over option keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}

/// A single multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    /// Category the question belongs to.
    category: String,
    /// Point value, awarded on a correct answer and deducted on a wrong one.
    value: u32,
    /// The prompt text shown to the player.
    prompt: String,
    /// Answer options in source order.
    options: Options,
    /// Key of the correct option.
    correct_answer: String,
}

impl Question {
    /// Creates a question with no options yet.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        value: u32,
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            value,
            prompt: prompt.into(),
            options: Options::new(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Adds an option, builder style.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.options.insert(key, text);
        self
    }

    /// Replaces the full option mapping, builder style.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the point value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns the prompt text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the option mapping.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the correct-answer key.
    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Corrects the prompt text after load (administrative use).
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Corrects the correct-answer key after load (administrative use).
    pub fn set_correct_answer(&mut self, key: impl Into<String>) {
        self.correct_answer = key.into();
    }

    /// Evaluates a given answer key against the correct one.
    ///
    /// The comparison is case-insensitive, and a composite correct-answer
    /// field of the form "Option" + key is accepted as equal to the bare
    /// key, so data stored either way grades identically.
    #[must_use]
    pub fn accepts_answer(&self, given: &str) -> bool {
        let correct = self.correct_answer.trim();
        correct.eq_ignore_ascii_case(given)
            || correct.eq_ignore_ascii_case(&format!("Option{given}"))
    }

    /// Returns whether this question matches a selection.
    ///
    /// Category comparison is case-insensitive; value must match exactly.
    #[must_use]
    pub fn matches_selection(&self, category: &str, value: u32) -> bool {
        self.value == value && self.category.eq_ignore_ascii_case(category)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}: {}", self.category, self.value, self.prompt)
    }
}
