//! Error handling tests.
//!
//! Verifies which operations surface compilation failures and which ones fall
//! back to their documented defaults.

use patternkit::error::{PatternError, PatternResult};
use std::error::Error as StdError;

mod common;
use common::*;

const BROKEN: &[&str] = &["(", "[", "a{2,1}", r"\", "(?P<x>a)(?P<x>b)"];

#[test]
fn test_invalid_pattern_display() {
    let (_, cache) = fresh_engine();
    let err = cache.get_or_compile("[").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("Invalid pattern"));
    assert!(display.contains("'['"));
}

#[test]
fn test_invalid_pattern_source_chain() {
    let (_, cache) = fresh_engine();
    let err = cache.get_or_compile("(").unwrap_err();

    let source = err.source().expect("regex error is kept as source");
    assert!(source.downcast_ref::<regex::Error>().is_some());
}

#[test]
fn test_propagating_operations() {
    let (engine, cache) = fresh_engine();

    for pattern in BROKEN {
        assert!(matches!(
            cache.get_or_compile(pattern),
            Err(PatternError::InvalidPattern { .. })
        ));
        assert!(engine.find_all(pattern, "abc").is_err());
        assert!(engine.first_match(pattern, "abc").is_err());
    }
}

#[test]
fn test_convenience_operations_fall_back() {
    let (engine, cache) = fresh_engine();

    for pattern in BROKEN {
        assert!(!engine.exists(Some(*pattern), "abc"));
        assert!(!engine.matches_entirely(Some(*pattern), "abc"));
        assert!(!engine.matches_at_start(pattern, "abc"));
        assert_eq!(engine.first_match_offset(pattern, "abc"), None);
        assert!(engine.extract_all(pattern, "abc").is_empty());
        assert_eq!(engine.replace_all(pattern, "abc", "X"), "abc");
        assert_eq!(engine.replace_first(pattern, "abc", "X"), "");
    }

    assert!(cache.is_empty());
}

#[test]
fn test_error_propagation_with_question_mark() {
    fn count(pattern: &str) -> PatternResult<usize> {
        let (engine, _) = fresh_engine();
        Ok(engine.find_all(pattern, "1 2 3")?.len())
    }

    assert_eq!(count(r"\d").unwrap(), 3);
    assert!(count("(").is_err());
}

#[test]
fn test_mapping_error_display() {
    let err = patternkit::parse_mapping("A=2\n=3").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid mapping on line 2: key must be a single character"
    );
    assert!(err.pattern().is_none());
}

#[test]
fn test_errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PatternError>();
}
