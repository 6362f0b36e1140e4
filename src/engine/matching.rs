//! Match discovery, anchoring and position lookup.

use super::PatternEngine;
use crate::error::PatternResult;
use regex::Captures;
use std::ops::Range;

/// One located occurrence of a pattern within a subject string.
///
/// Offsets are byte offsets into the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t> {
    subject: &'t str,
    start: usize,
    end: usize,
    groups: Vec<Option<Range<usize>>>,
}

impl<'t> Match<'t> {
    fn from_captures(subject: &'t str, caps: &Captures<'t>) -> Self {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        Self {
            subject,
            start: whole.start,
            end: whole.end,
            groups: caps.iter().skip(1).map(|g| g.map(|m| m.range())).collect(),
        }
    }

    /// Offset of the first byte of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last byte of the match.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the match in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true for a zero-length match.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Byte range of the match within the subject.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text.
    pub fn as_str(&self) -> &'t str {
        &self.subject[self.range()]
    }

    /// Text of capture group `index`, if the group took part in the match.
    ///
    /// Group 0 is the whole match, as with [`regex::Captures::get`].
    pub fn group(&self, index: usize) -> Option<&'t str> {
        if index == 0 {
            return Some(self.as_str());
        }
        let range = self.groups.get(index - 1)?.clone()?;
        Some(&self.subject[range])
    }

    /// Number of capture groups in the pattern, not counting the whole match.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl PatternEngine {
    /// Finds every match of `pattern` in `subject`, left to right and non-overlapping.
    ///
    /// An empty subject has no matches unless the pattern can match the empty
    /// string (`x*`, `^$`), in which case it yields one zero-length match at 0.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PatternError::InvalidPattern`] if the pattern does not compile.
    ///
    /// # Example
    ///
    /// ```
    /// use patternkit::PatternEngine;
    ///
    /// let engine = PatternEngine::new();
    /// let offsets: Vec<usize> = engine
    ///     .find_all(r"\d", "a1b2c3")
    ///     .unwrap()
    ///     .iter()
    ///     .map(|m| m.start())
    ///     .collect();
    /// assert_eq!(offsets, vec![1, 3, 5]);
    /// ```
    pub fn find_all<'t>(&self, pattern: &str, subject: &'t str) -> PatternResult<Vec<Match<'t>>> {
        let regex = self.cache.get_or_compile(pattern)?;
        Ok(regex
            .captures_iter(subject)
            .map(|caps| Match::from_captures(subject, &caps))
            .collect())
    }

    /// Returns the first match of `pattern` in `subject`, captures included.
    pub fn first_match<'t>(
        &self,
        pattern: &str,
        subject: &'t str,
    ) -> PatternResult<Option<Match<'t>>> {
        let regex = self.cache.get_or_compile(pattern)?;
        Ok(regex
            .captures(subject)
            .map(|caps| Match::from_captures(subject, &caps)))
    }

    /// Returns true if some match of `pattern` begins at offset 0.
    pub fn matches_at_start(&self, pattern: &str, subject: &str) -> bool {
        // Matches come back in order, so only the first can start at 0.
        self.regex_or_log(pattern)
            .and_then(|regex| regex.find(subject).map(|m| m.start() == 0))
            .unwrap_or(false)
    }

    /// Offset of the first match, or `None` when nothing matches or the pattern is invalid.
    pub fn first_match_offset(&self, pattern: &str, subject: &str) -> Option<usize> {
        let regex = self.regex_or_log(pattern)?;
        regex.find(subject).map(|m| m.start())
    }

    /// Returns true if `pattern` matches anywhere in `subject`.
    ///
    /// An absent or empty pattern, or one that does not compile, never matches.
    pub fn exists(&self, pattern: Option<&str>, subject: &str) -> bool {
        match pattern {
            Some(pattern) if !pattern.is_empty() => self
                .regex_or_log(pattern)
                .is_some_and(|regex| regex.is_match(subject)),
            _ => false,
        }
    }

    /// Returns true if `pattern` consumes the whole of `subject`.
    ///
    /// The pattern is wrapped as `^(pattern)$` before matching, so a match on a
    /// prefix or suffix alone is not enough.
    ///
    /// ```
    /// use patternkit::PatternEngine;
    ///
    /// let engine = PatternEngine::new();
    /// assert!(engine.matches_entirely(Some("ab+"), "abbb"));
    /// assert!(!engine.matches_entirely(Some("ab+"), "xabbb"));
    /// ```
    pub fn matches_entirely(&self, pattern: Option<&str>, subject: &str) -> bool {
        match pattern {
            Some(pattern) => self.exists(Some(&format!("^({})$", pattern)), subject),
            None => false,
        }
    }

    /// Returns the matched text of every match, in match order.
    ///
    /// An invalid pattern yields an empty vector.
    pub fn extract_all<'t>(&self, pattern: &str, subject: &'t str) -> Vec<&'t str> {
        self.regex_or_log(pattern)
            .map(|regex| regex.find_iter(subject).map(|m| m.as_str()).collect())
            .unwrap_or_default()
    }
}
