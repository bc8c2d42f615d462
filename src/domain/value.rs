// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic value model produced by the decoders.
//!
//! `SecretValue` is the tree every format decodes into. Mappings are ordered
//! by key so that serialized output is stable across runs.

use crate::domain::errors::Result;
use serde::{ser, Serialize, Serializer};
use std::collections::BTreeMap;

/// A string-keyed mapping of values.
pub type Mapping = BTreeMap<String, SecretValue>;

/// A decoded secrets document, or a part of one.
///
/// # Examples
///
/// ```
/// use sops_read_secret::domain::SecretValue;
///
/// let value = SecretValue::from("hunter2");
/// assert_eq!(value.render().unwrap(), b"hunter2");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SecretValue {
    /// Explicit null
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Number(serde_json::Number),
    /// Floating-point scalar, possibly infinite or NaN
    #[serde(serialize_with = "serialize_float")]
    Float(f64),
    /// Text scalar
    String(String),
    /// Opaque bytes, written out unchanged
    Bytes(Vec<u8>),
    /// Ordered list of values
    Sequence(Vec<SecretValue>),
    /// String-keyed mapping
    Mapping(Mapping),
}

impl SecretValue {
    /// Returns the text if this is a `String`, or `Bytes` holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SecretValue::String(s) => Some(s),
            SecretValue::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the raw bytes of a `String` or `Bytes` value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            SecretValue::String(s) => Some(s.as_bytes()),
            SecretValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the mapping if this is a `Mapping`.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            SecretValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns true if this is a `Mapping`.
    pub fn is_mapping(&self) -> bool {
        matches!(self, SecretValue::Mapping(_))
    }

    /// Renders the value as output bytes.
    ///
    /// Strings and bytes are written verbatim. Everything else is serialized
    /// as JSON with a two-space indent, which for scalars is just their
    /// literal text. Infinite and NaN floats cannot be serialized and fail
    /// here, not when the document is decoded. No trailing newline is added.
    ///
    /// # Examples
    ///
    /// ```
    /// use sops_read_secret::domain::SecretValue;
    /// use std::collections::BTreeMap;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("b".to_string(), SecretValue::from("2"));
    /// map.insert("a".to_string(), SecretValue::Bool(true));
    /// let out = SecretValue::from(map).render().unwrap();
    /// assert_eq!(out, b"{\n  \"a\": true,\n  \"b\": \"2\"\n}");
    /// ```
    pub fn render(&self) -> Result<Vec<u8>> {
        match self {
            SecretValue::String(s) => Ok(s.as_bytes().to_vec()),
            SecretValue::Bytes(b) => Ok(b.clone()),
            other => Ok(serde_json::to_vec_pretty(other)?),
        }
    }
}

/// Writes integral floats without a fraction, so `1.0` renders as `1`.
fn serialize_float<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    if !value.is_finite() {
        return Err(ser::Error::custom(format!("unsupported value: {value}")));
    }
    if value.fract() == 0.0 && value.abs() < I64_BOUND {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl From<&str> for SecretValue {
    fn from(s: &str) -> Self {
        SecretValue::String(s.to_string())
    }
}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue::String(s)
    }
}

impl From<bool> for SecretValue {
    fn from(b: bool) -> Self {
        SecretValue::Bool(b)
    }
}

impl From<i64> for SecretValue {
    fn from(n: i64) -> Self {
        SecretValue::Number(n.into())
    }
}

impl From<f64> for SecretValue {
    fn from(n: f64) -> Self {
        SecretValue::Float(n)
    }
}

impl From<Vec<u8>> for SecretValue {
    fn from(bytes: Vec<u8>) -> Self {
        SecretValue::Bytes(bytes)
    }
}

impl From<Mapping> for SecretValue {
    fn from(map: Mapping) -> Self {
        SecretValue::Mapping(map)
    }
}

impl From<Vec<SecretValue>> for SecretValue {
    fn from(seq: Vec<SecretValue>) -> Self {
        SecretValue::Sequence(seq)
    }
}
