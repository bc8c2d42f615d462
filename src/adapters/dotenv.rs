// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotenv decoder adapter.
//!
//! Parses `KEY=VALUE` lines with `dotenvy` into a flat mapping of strings.

use crate::domain::{FormatTag, Mapping, Result, SecretError, SecretValue};
use crate::ports::SecretDecoder;

/// Dotenv decoder implementation.
///
/// Keys are never nested; a later assignment to the same key wins.
///
/// # Examples
///
/// ```rust
/// use sops_read_secret::adapters::DotenvDecoder;
/// use sops_read_secret::ports::SecretDecoder;
///
/// let value = DotenvDecoder::new().decode(b"FOO=bar\nBAZ=qux").unwrap();
/// assert_eq!(value.as_mapping().unwrap()["FOO"].as_str(), Some("bar"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DotenvDecoder;

impl DotenvDecoder {
    /// Creates a new dotenv decoder.
    pub fn new() -> Self {
        DotenvDecoder
    }
}

impl SecretDecoder for DotenvDecoder {
    fn decode(&self, plaintext: &[u8]) -> Result<SecretValue> {
        let mut result = Mapping::new();
        for item in dotenvy::from_read_iter(plaintext) {
            let (key, value) = item.map_err(|e| SecretError::parse(FormatTag::Dotenv, e))?;
            result.insert(key, SecretValue::String(value));
        }
        Ok(SecretValue::Mapping(result))
    }

    fn format(&self) -> FormatTag {
        FormatTag::Dotenv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(content: &str) -> Mapping {
        DotenvDecoder::new()
            .decode(content.as_bytes())
            .unwrap()
            .as_mapping()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_decode_pairs() {
        let map = decode("FOO=bar\nBAZ=qux");
        assert_eq!(map.len(), 2);
        assert_eq!(map["FOO"].as_str(), Some("bar"));
        assert_eq!(map["BAZ"].as_str(), Some("qux"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let map = decode("# comment\n\nTOKEN=abc123\n");
        assert_eq!(map.len(), 1);
        assert_eq!(map["TOKEN"].as_str(), Some("abc123"));
    }

    #[test]
    fn test_quoted_values() {
        let map = decode("GREETING=\"hello world\"\nSINGLE='a b'\n");
        assert_eq!(map["GREETING"].as_str(), Some("hello world"));
        assert_eq!(map["SINGLE"].as_str(), Some("a b"));
    }

    #[test]
    fn test_dotted_key_is_flat() {
        let map = decode("FOO.BAR=1\n");
        assert_eq!(map["FOO.BAR"].as_str(), Some("1"));
    }

    #[test]
    fn test_empty_input() {
        assert!(decode("").is_empty());
    }

    #[test]
    fn test_last_assignment_wins() {
        let map = decode("KEY=first\nKEY=second\n");
        assert_eq!(map["KEY"].as_str(), Some("second"));
    }

    #[test]
    fn test_invalid_line() {
        let err = DotenvDecoder::new().decode(b"NOT A PAIR\n").unwrap_err();
        assert!(matches!(err, SecretError::Parse { format: FormatTag::Dotenv, .. }));
    }
}
