//! Template based substitution.
//!
//! Templates are inserted verbatim: `$1` or `${name}` in a template is literal
//! text, not a group reference.

use super::PatternEngine;
use regex::NoExpand;

/// Result of [`PatternEngine::replace_first`] when the pattern does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplaceFallback {
    /// Return an empty string (the historical behavior).
    #[default]
    Empty,

    /// Return the subject unchanged, like [`PatternEngine::replace_all`].
    Subject,
}

impl PatternEngine {
    /// Replaces every match of `pattern` in `subject` with `template`.
    ///
    /// Returns `subject` unchanged when nothing matches or the pattern does
    /// not compile.
    ///
    /// ```
    /// use patternkit::PatternEngine;
    ///
    /// let engine = PatternEngine::new();
    /// assert_eq!(engine.replace_all("a", "banana", ""), "bnn");
    /// assert_eq!(engine.replace_all("^a", "apple", ""), "pple");
    /// ```
    pub fn replace_all(&self, pattern: &str, subject: &str, template: &str) -> String {
        match self.regex_or_log(pattern) {
            Some(regex) => regex.replace_all(subject, NoExpand(template)).into_owned(),
            None => subject.to_string(),
        }
    }

    /// Removes every match of `pattern` from `subject`.
    pub fn remove_all(&self, pattern: &str, subject: &str) -> String {
        self.replace_all(pattern, subject, "")
    }

    /// Replaces only the first match of `pattern` in `subject` with `template`.
    ///
    /// Returns `subject` unchanged when nothing matches. When the pattern does
    /// not compile the result follows the engine's [`ReplaceFallback`].
    pub fn replace_first(&self, pattern: &str, subject: &str, template: &str) -> String {
        match self.regex_or_log(pattern) {
            Some(regex) => regex.replace(subject, NoExpand(template)).into_owned(),
            None => match self.replace_first_fallback {
                ReplaceFallback::Empty => String::new(),
                ReplaceFallback::Subject => subject.to_string(),
            },
        }
    }
}
