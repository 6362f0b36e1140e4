//! Character remapping for number normalization.
//!
//! These helpers never touch the pattern cache.

use crate::error::{PatternError, PatternResult};
use std::collections::HashMap;

/// Rewrites `subject` character by character through `map`.
///
/// Each character is uppercased and looked up. Mapped characters are replaced
/// by their value; characters without an entry are dropped from the output.
/// A character whose uppercase form is several characters (such as `ß`) is
/// never found in a single-character map.
///
/// ```
/// use patternkit::normalize;
/// use std::collections::HashMap;
///
/// let map: HashMap<char, &str> = [('A', "2"), ('B', "2"), ('C', "2")].into();
/// assert_eq!(normalize("abc-1", &map), "222");
/// ```
pub fn normalize<S: AsRef<str>>(subject: &str, map: &HashMap<char, S>) -> String {
    let mut normalized = String::with_capacity(subject.len());
    for c in subject.chars() {
        let mut upper = c.to_uppercase();
        if let (Some(key), None) = (upper.next(), upper.next()) {
            if let Some(value) = map.get(&key) {
                normalized.push_str(value.as_ref());
            }
        }
    }
    normalized
}

/// The E.161 telephone keypad table.
///
/// Digits map to themselves, letters to the digit of their key and `+` to
/// itself.
pub fn keypad_mapping() -> HashMap<char, String> {
    const KEYS: [(char, &str); 9] = [
        ('2', "ABC"),
        ('3', "DEF"),
        ('4', "GHI"),
        ('5', "JKL"),
        ('6', "MNO"),
        ('7', "PQRS"),
        ('8', "TUV"),
        ('9', "WXYZ"),
        ('+', ""),
    ];

    let mut map: HashMap<char, String> = ('0'..='9').map(|d| (d, d.to_string())).collect();
    for (digit, letters) in KEYS {
        map.insert(digit, digit.to_string());
        for letter in letters.chars() {
            map.insert(letter, digit.to_string());
        }
    }
    map
}

/// Parses a mapping table of `KEY=VALUE` lines.
///
/// Blank lines and lines starting with `#` are skipped, so `#` cannot be used
/// as a key. The key is trimmed, must be a single character and is stored
/// uppercased to match the lookup done by [`normalize`]. A line starting with
/// `==` maps the `=` character. The value is everything after the separator,
/// untrimmed, and may be empty. Later lines override earlier ones.
///
/// # Errors
///
/// Returns [`PatternError::InvalidMapping`] with the 1-based line number when a
/// line has no `=`, its key is not exactly one character, or the key has no
/// single-character uppercase form.
pub fn parse_mapping(text: &str) -> PatternResult<HashMap<char, String>> {
    let mut map = HashMap::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_start();
        if line.trim_end().is_empty() || line.starts_with('#') {
            continue;
        }

        let invalid = |reason: &str| PatternError::InvalidMapping {
            line: index + 1,
            reason: reason.to_string(),
        };

        let (key, value) = match line.strip_prefix("==") {
            Some(value) => ("=", value),
            None => line.split_once('=').ok_or_else(|| invalid("missing '='"))?,
        };
        let mut chars = key.trim().chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(invalid("key must be a single character")),
        };
        let mut upper = key.to_uppercase();
        let key = match (upper.next(), upper.next()) {
            (Some(c), None) => c,
            _ => return Err(invalid("key has no single-character uppercase form")),
        };
        map.insert(key, value.to_string());
    }

    Ok(map)
}

/// Returns true if `value` is present and not blank.
///
/// Whitespace, newlines and the no-break space (U+00A0) count as blank.
pub fn has_value(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        !v.trim_matches(|c: char| c.is_whitespace() || c == '\u{00a0}')
            .is_empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_characters_are_dropped() {
        let map: HashMap<char, &str> = [('A', "2"), ('B', "2"), ('C', "2")].into();
        assert_eq!(normalize("abc-1", &map), "222");
        assert_eq!(normalize("", &map), "");
        assert_eq!(normalize("xyz", &map), "");
    }

    #[test]
    fn test_values_may_expand_or_erase() {
        let map: HashMap<char, &str> = [('A', "aa"), ('-', ""), ('1', "one")].into();
        assert_eq!(normalize("a-1", &map), "aaone");
    }

    #[test]
    fn test_multi_char_uppercase_is_dropped() {
        let map: HashMap<char, &str> = [('S', "7"), ('ß', "x")].into();
        assert_eq!(normalize("sß", &map), "7");
    }

    #[test]
    fn test_keypad_mapping() {
        let map = keypad_mapping();
        assert_eq!(normalize("1-800-FLOWERS", &map), "18003569377");
        assert_eq!(normalize("+33 (0)6 89", &map), "+330689");
        assert_eq!(map.len(), 10 + 26 + 1);
    }

    #[test]
    fn test_parse_mapping() {
        let map = parse_mapping("# digits\nA=2\n\n B =2\n-=\n").unwrap();
        assert_eq!(map.get(&'A').map(String::as_str), Some("2"));
        assert_eq!(map.get(&'B').map(String::as_str), Some("2"));
        assert_eq!(map.get(&'-').map(String::as_str), Some(""));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_parse_mapping_uppercases_keys() {
        let map = parse_mapping("a=2\nb=2").unwrap();
        assert_eq!(map.get(&'A').map(String::as_str), Some("2"));
        assert!(!map.contains_key(&'a'));
        assert_eq!(normalize("ab", &map), "22");
    }

    #[test]
    fn test_parse_mapping_values_are_verbatim() {
        let map = parse_mapping("_= \n==x\nT=a=b\n").unwrap();
        assert_eq!(map.get(&'_').map(String::as_str), Some(" "));
        assert_eq!(map.get(&'=').map(String::as_str), Some("x"));
        assert_eq!(map.get(&'T').map(String::as_str), Some("a=b"));
        assert_eq!(normalize("1_=", &map), " x");
    }

    #[test]
    fn test_parse_mapping_errors() {
        let err = parse_mapping("A=2\nB2").unwrap_err();
        assert!(matches!(err, PatternError::InvalidMapping { line: 2, .. }));

        let err = parse_mapping("AB=2").unwrap_err();
        assert!(matches!(err, PatternError::InvalidMapping { line: 1, .. }));

        let err = parse_mapping("A=2\n\nß=s").unwrap_err();
        assert!(matches!(err, PatternError::InvalidMapping { line: 3, .. }));
    }

    #[test]
    fn test_has_value() {
        assert!(has_value(Some("0")));
        assert!(!has_value(None));
        assert!(!has_value(Some("")));
        assert!(!has_value(Some(" \n\t\u{00a0}")));
    }
}
