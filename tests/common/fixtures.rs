//! Test fixtures.

#![allow(dead_code)]

use patternkit::{PatternCache, PatternEngine};
use std::collections::HashMap;
use std::sync::Arc;

/// Formatting patterns of the kind number formatters run repeatedly.
pub const FORMAT_PATTERNS: &[&str] = &[
    r"\d{2}",
    r"^\+",
    r"(\d{2})(\d{2})(\d{2})(\d{2})(\d{2})",
    r"[- ()]",
    r"\d{3}-\d{3}-\d{4}",
    r"(?:ext|x)\.?\s*\d+",
];

/// Sample subjects covering empty, plain and formatted input.
pub const SUBJECTS: &[&str] = &[
    "",
    "0",
    "0689555555",
    "06 89 55 55 55",
    "+33 6 89 55 55 55",
    "555-234-5678 EXT 12",
    "no digits here",
];

/// Builds an engine over its own fresh cache.
pub fn fresh_engine() -> (PatternEngine, Arc<PatternCache>) {
    let cache = Arc::new(PatternCache::new());
    (PatternEngine::with_cache(Arc::clone(&cache)), cache)
}

/// Mapping table for the ABC keypad key only.
pub fn abc_map() -> HashMap<char, String> {
    ['A', 'B', 'C']
        .into_iter()
        .map(|c| (c, "2".to_string()))
        .collect()
}
