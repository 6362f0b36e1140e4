//! Cached, thread-safe pattern matching for phone number formatting.
//!
//! Number parsing and formatting code runs the same small set of regular
//! expressions over and over, often from several threads at once. This library
//! compiles each pattern once, shares the compiled form through a
//! reader-writer locked cache, and exposes the matching, replacement and
//! normalization helpers that formatting code needs.
//!
//! # Architecture
//!
//! - [`cache`]: The pattern cache (shared reads, exclusive inserts)
//! - [`engine`]: Matching and replacement operations over the cache
//! - [`normalize`](mod@normalize): Character remapping, independent of the cache
//! - [`error`]: Error types
//!
//! # Quick Start
//!
//! ```
//! use patternkit::PatternEngine;
//!
//! let engine = PatternEngine::new();
//!
//! assert!(engine.matches_entirely(Some(r"\d{2}(?: \d{2}){4}"), "06 89 55 55 55"));
//! assert_eq!(engine.extract_all(r"\d+", "06 89 55"), vec!["06", "89", "55"]);
//! assert_eq!(engine.replace_all(r"\D", "(06) 89-55", ""), "068955");
//! ```
//!
//! # Isolated caches
//!
//! [`PatternEngine::new`] uses the process-wide cache. Pass your own cache to
//! control its lifetime or to keep tests independent:
//!
//! ```
//! use patternkit::{PatternCache, PatternEngine};
//! use std::sync::Arc;
//!
//! let cache = Arc::new(PatternCache::new());
//! let engine = PatternEngine::with_cache(Arc::clone(&cache));
//!
//! assert_eq!(engine.first_match_offset(r"\+", "00 +33"), Some(3));
//! assert!(cache.contains(r"\+"));
//! ```

// Public API
pub mod cache;
pub mod engine;
pub mod error;
pub mod normalize;

// Re-exports for convenient access
pub use cache::{CacheConfig, PatternCache};
pub use engine::{Match, PatternEngine, ReplaceFallback};
pub use error::{PatternError, PatternResult};
pub use normalize::{has_value, keypad_mapping, normalize, parse_mapping};
