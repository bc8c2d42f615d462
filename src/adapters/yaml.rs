// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML and JSON decoder adapter.
//!
//! JSON is a subset of YAML, so both formats go through `serde_yaml`. The
//! document must have a mapping at the top level.

use crate::domain::{FormatTag, Mapping, Result, SecretError, SecretValue};
use crate::ports::SecretDecoder;
use tracing::trace;

/// YAML/JSON decoder implementation.
///
/// # Examples
///
/// ```rust
/// use sops_read_secret::adapters::YamlDecoder;
/// use sops_read_secret::ports::SecretDecoder;
///
/// let decoder = YamlDecoder::new();
/// let value = decoder.decode(b"database:\n  host: localhost\n  port: 5432").unwrap();
/// let database = value.as_mapping().unwrap()["database"].as_mapping().unwrap();
/// assert_eq!(database["host"].as_str(), Some("localhost"));
/// ```
#[derive(Debug, Clone)]
pub struct YamlDecoder {
    format: FormatTag,
}

impl YamlDecoder {
    /// Creates a decoder for YAML documents.
    pub fn new() -> Self {
        Self {
            format: FormatTag::Yaml,
        }
    }

    /// Creates a decoder for JSON documents.
    pub fn json() -> Self {
        Self {
            format: FormatTag::Json,
        }
    }

    fn error(&self, message: impl Into<String>) -> SecretError {
        SecretError::Parse {
            format: self.format,
            message: message.into(),
            source: None,
        }
    }

    /// Converts a YAML value into the generic value model.
    fn convert(&self, value: serde_yaml::Value) -> Result<SecretValue> {
        match value {
            serde_yaml::Value::Null => Ok(SecretValue::Null),
            serde_yaml::Value::Bool(b) => Ok(SecretValue::Bool(b)),
            serde_yaml::Value::Number(n) => self.convert_number(&n),
            serde_yaml::Value::String(s) => Ok(SecretValue::String(s)),
            serde_yaml::Value::Sequence(seq) => seq
                .into_iter()
                .map(|item| self.convert(item))
                .collect::<Result<Vec<_>>>()
                .map(SecretValue::Sequence),
            serde_yaml::Value::Mapping(map) => {
                let mut result = Mapping::new();
                for (key, val) in map {
                    result.insert(self.convert_key(key)?, self.convert(val)?);
                }
                Ok(SecretValue::Mapping(result))
            }
            serde_yaml::Value::Tagged(tagged) => self.convert(tagged.value),
        }
    }

    /// Integers stay exact. Floats are kept as-is, including `.inf` and
    /// `.nan`, which only fail if they end up in the rendered output.
    fn convert_number(&self, n: &serde_yaml::Number) -> Result<SecretValue> {
        if let Some(i) = n.as_i64() {
            Ok(SecretValue::Number(i.into()))
        } else if let Some(u) = n.as_u64() {
            Ok(SecretValue::Number(u.into()))
        } else {
            n.as_f64()
                .map(SecretValue::Float)
                .ok_or_else(|| self.error(format!("number {} cannot be represented", n)))
        }
    }

    /// Mapping keys become exact-match strings. Scalar keys use their text
    /// form; structured keys are rejected.
    fn convert_key(&self, key: serde_yaml::Value) -> Result<String> {
        match key {
            serde_yaml::Value::String(s) => Ok(s),
            serde_yaml::Value::Bool(b) => Ok(b.to_string()),
            serde_yaml::Value::Number(n) => Ok(n.to_string()),
            serde_yaml::Value::Null => Ok("null".to_string()),
            serde_yaml::Value::Tagged(tagged) => self.convert_key(tagged.value),
            serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => {
                Err(self.error("mapping keys must be scalars"))
            }
        }
    }
}

impl Default for YamlDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretDecoder for YamlDecoder {
    fn decode(&self, plaintext: &[u8]) -> Result<SecretValue> {
        let value: serde_yaml::Value =
            serde_yaml::from_slice(plaintext).map_err(|e| SecretError::parse(self.format, e))?;

        match self.convert(value)? {
            SecretValue::Null => {
                trace!(format = %self.format, "empty document decoded as empty mapping");
                Ok(SecretValue::Mapping(Mapping::new()))
            }
            mapping @ SecretValue::Mapping(_) => Ok(mapping),
            _ => Err(self.error("top-level value must be a mapping")),
        }
    }

    fn format(&self) -> FormatTag {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(content: &str) -> SecretValue {
        YamlDecoder::new().decode(content.as_bytes()).unwrap()
    }

    #[test]
    fn test_decode_nested_yaml() {
        let value = decode("a:\n  b:\n    c: 1\n");
        let a = value.as_mapping().unwrap()["a"].as_mapping().unwrap();
        let b = a["b"].as_mapping().unwrap();
        assert_eq!(b["c"], SecretValue::from(1));
    }

    #[test]
    fn test_decode_scalars() {
        let value = decode("s: text\ni: -7\nf: 1.5\nb: true\nn: null\nbig: 18446744073709551615\n");
        let map = value.as_mapping().unwrap();
        assert_eq!(map["s"], SecretValue::from("text"));
        assert_eq!(map["i"], SecretValue::from(-7));
        assert_eq!(map["f"], SecretValue::Float(1.5));
        assert_eq!(map["b"], SecretValue::Bool(true));
        assert_eq!(map["n"], SecretValue::Null);
        assert_eq!(map["big"], SecretValue::Number(u64::MAX.into()));
    }

    #[test]
    fn test_decode_sequence() {
        let value = decode("hosts:\n  - a\n  - b\n");
        let hosts = &value.as_mapping().unwrap()["hosts"];
        assert_eq!(
            *hosts,
            SecretValue::from(vec![SecretValue::from("a"), SecretValue::from("b")])
        );
    }

    #[test]
    fn test_decode_json() {
        let decoder = YamlDecoder::json();
        let value = decoder
            .decode(br#"{"db": {"user": "admin", "port": 5432}}"#)
            .unwrap();
        let db = value.as_mapping().unwrap()["db"].as_mapping().unwrap();
        assert_eq!(db["user"].as_str(), Some("admin"));
        assert_eq!(db["port"], SecretValue::from(5432));
        assert_eq!(decoder.format(), FormatTag::Json);
    }

    #[test]
    fn test_scalar_keys_become_strings() {
        let value = decode("1: one\ntrue: yes\n");
        let map = value.as_mapping().unwrap();
        assert_eq!(map["1"].as_str(), Some("one"));
        assert!(map.contains_key("true"));
    }

    #[test]
    fn test_tagged_values_are_unwrapped() {
        let value = decode("secret: !custom hidden\n");
        assert_eq!(value.as_mapping().unwrap()["secret"].as_str(), Some("hidden"));
    }

    #[test]
    fn test_null_document_is_empty_mapping() {
        let value = decode("~\n");
        assert_eq!(value, SecretValue::Mapping(Mapping::new()));
    }

    #[test]
    fn test_top_level_scalar_is_rejected() {
        let err = YamlDecoder::new().decode(b"just a string").unwrap_err();
        assert!(matches!(err, SecretError::Parse { format: FormatTag::Yaml, .. }));
    }

    #[test]
    fn test_top_level_sequence_is_rejected() {
        let err = YamlDecoder::json().decode(b"[1, 2]").unwrap_err();
        assert!(matches!(err, SecretError::Parse { format: FormatTag::Json, .. }));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = YamlDecoder::new().decode(b"key: [unclosed").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse yaml"));
    }

    #[test]
    fn test_structured_key_is_rejected() {
        let err = YamlDecoder::new().decode(b"? [a, b]\n: value\n").unwrap_err();
        assert!(err.to_string().contains("mapping keys must be scalars"));
    }

    #[test]
    fn test_non_finite_numbers_are_kept() {
        let value = decode("limit: .inf\nfloor: -.inf\nratio: .nan\ntoken: abc\n");
        let map = value.as_mapping().unwrap();
        assert_eq!(map["limit"], SecretValue::Float(f64::INFINITY));
        assert_eq!(map["floor"], SecretValue::Float(f64::NEG_INFINITY));
        assert!(matches!(map["ratio"], SecretValue::Float(f) if f.is_nan()));
        assert_eq!(map["token"].as_str(), Some("abc"));
    }
}
