//! Matching and replacement over cached patterns.
//!
//! [`PatternEngine`] is the entry point for callers. It asks its
//! [`PatternCache`] for a compiled matcher and runs the requested operation
//! over the subject string.
//!
//! Only [`PatternEngine::find_all`] and [`PatternEngine::first_match`] report
//! compilation failures. Every other operation logs the failure and returns its
//! documented default, so formatting code never needs error handling around
//! them.

pub mod matching;
pub mod replace;

pub use matching::Match;
pub use replace::ReplaceFallback;

use crate::cache::PatternCache;
use crate::error::PatternError;
use regex::Regex;
use std::sync::Arc;

/// Pattern matching and replacement service backed by a shared cache.
///
/// Cloning an engine is cheap and the clone shares the same cache.
#[derive(Debug, Clone)]
pub struct PatternEngine {
    cache: Arc<PatternCache>,
    replace_first_fallback: ReplaceFallback,
}

impl PatternEngine {
    /// Creates an engine using the process-wide shared cache.
    pub fn new() -> Self {
        Self::with_cache(PatternCache::shared())
    }

    /// Creates an engine over an explicitly owned cache.
    pub fn with_cache(cache: Arc<PatternCache>) -> Self {
        Self {
            cache,
            replace_first_fallback: ReplaceFallback::default(),
        }
    }

    /// Sets what [`PatternEngine::replace_first`] returns when the pattern does not compile.
    pub fn with_replace_first_fallback(mut self, fallback: ReplaceFallback) -> Self {
        self.replace_first_fallback = fallback;
        self
    }

    /// Returns the cache backing this engine.
    pub fn cache(&self) -> &Arc<PatternCache> {
        &self.cache
    }

    /// Looks up a compiled pattern, logging and discarding a compilation failure.
    fn regex_or_log(&self, pattern: &str) -> Option<Regex> {
        match self.cache.get_or_compile(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                log_failure(&err);
                None
            }
        }
    }
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn log_failure(err: &PatternError) {
    log::error!("{}", err);
}
