//! Thread-safe cache of compiled patterns.
//!
//! Patterns are compiled lazily on first request and kept for the lifetime of
//! the cache. Lookups take a shared lock so concurrent readers never block each
//! other; compilation runs outside any lock and only the final insert takes the
//! exclusive lock.

use crate::error::{PatternError, PatternResult};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::Arc;

/// Compilation settings applied to every pattern a cache compiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Compile patterns with case-insensitive matching.
    pub case_insensitive: bool,

    /// Upper bound in bytes on a compiled program, `None` keeps the engine default.
    pub size_limit: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            size_limit: None,
        }
    }
}

/// Cache mapping pattern text to its compiled [`Regex`].
///
/// Keys are the exact pattern text. Once an entry is published it is never
/// replaced or removed, so every caller asking for the same text gets a matcher
/// with identical behavior.
///
/// # Example
///
/// ```
/// use patternkit::PatternCache;
///
/// let cache = PatternCache::new();
/// let regex = cache.get_or_compile(r"ab+").unwrap();
/// assert!(regex.is_match("xABBB"));
/// assert!(cache.contains(r"ab+"));
/// ```
#[derive(Debug, Default)]
pub struct PatternCache {
    config: CacheConfig,
    entries: RwLock<HashMap<String, Regex>>,
}

impl PatternCache {
    /// Creates an empty cache compiling case-insensitively.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache with custom compilation settings.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the process-wide cache shared by [`crate::PatternEngine::new`].
    pub fn shared() -> Arc<PatternCache> {
        static SHARED: Lazy<Arc<PatternCache>> = Lazy::new(|| Arc::new(PatternCache::new()));
        Arc::clone(&SHARED)
    }

    /// Returns the compilation settings of this cache.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns the compiled form of `pattern`, compiling and caching it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidPattern`] when the text does not compile.
    /// Failed patterns are not cached, so each request reports the error again.
    pub fn get_or_compile(&self, pattern: &str) -> PatternResult<Regex> {
        if let Some(regex) = self.entries.read().get(pattern) {
            log::trace!("pattern cache hit: {:?}", pattern);
            return Ok(regex.clone());
        }

        let compiled = self.compile(pattern)?;

        let mut entries = self.entries.write();
        // Another thread may have published the same key while we compiled.
        let regex = entries
            .entry(pattern.to_string())
            .or_insert_with(|| {
                log::debug!("pattern cached: {:?}", pattern);
                compiled
            })
            .clone();
        Ok(regex)
    }

    /// Returns true if `pattern` has already been compiled into this cache.
    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.read().contains_key(pattern)
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn compile(&self, pattern: &str) -> PatternResult<Regex> {
        log::debug!("compiling pattern: {:?}", pattern);

        let mut builder = RegexBuilder::new(pattern);
        builder.case_insensitive(self.config.case_insensitive);
        if let Some(limit) = self.config.size_limit {
            builder.size_limit(limit);
        }

        builder
            .build()
            .map_err(|source| PatternError::invalid_pattern(pattern, source))
    }
}
