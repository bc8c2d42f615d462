// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key path extraction.
//!
//! Three lookup rules exist, chosen by format:
//!
//! - YAML and JSON walk nested mappings one `.`-separated segment at a time.
//! - Dotenv does a single exact lookup on the whole path, dots included.
//! - INI splits the path into at most a section and a key.
//!
//! Binary documents cannot be navigated; a key is ignored with a warning.
//! An empty path always returns the value unchanged.

use crate::domain::{FormatTag, KeyPath, Result, SecretError, SecretValue};
use tracing::{trace, warn};

/// Log target for warnings the user must always see, whatever the filter.
pub const NOTICE_TARGET: &str = "sops_read_secret::notice";

/// Walks nested mappings along a dotted path.
///
/// Every segment but the last must name a mapping. When that fails the
/// error carries the path up to the unresolved parent and the index of the
/// segment that could not be reached.
///
/// # Examples
///
/// ```rust
/// use sops_read_secret::adapters::YamlDecoder;
/// use sops_read_secret::domain::{KeyPath, SecretValue};
/// use sops_read_secret::ports::SecretDecoder;
/// use sops_read_secret::service::extract::extract;
///
/// let doc = YamlDecoder::new().decode(b"a:\n  b:\n    c: 1\n").unwrap();
/// let value = extract(&doc, &KeyPath::from("a.b.c")).unwrap();
/// assert_eq!(*value, SecretValue::from(1));
/// assert!(extract(&doc, &KeyPath::from("a.x")).is_err());
/// ```
pub fn extract<'a>(value: &'a SecretValue, path: &KeyPath) -> Result<&'a SecretValue> {
    if path.is_empty() {
        return Ok(value);
    }

    let segments = path.segments();
    let (last, parents) = match segments.split_last() {
        Some(split) => split,
        None => return Ok(value),
    };

    let mut current = value;
    for (index, segment) in parents.iter().enumerate() {
        current = current
            .as_mapping()
            .and_then(|map| map.get(*segment))
            .filter(|next| next.is_mapping())
            .ok_or_else(|| SecretError::PathNotFound {
                path: segments[..=index].join("."),
                segment_index: index + 1,
            })?;
        trace!(segment = %segment, "descended into mapping");
    }

    current
        .as_mapping()
        .and_then(|map| map.get(*last))
        .ok_or_else(|| SecretError::KeyNotFound {
            key: path.to_string(),
        })
}

/// Looks up the whole path as one flat key.
///
/// Dots have no special meaning here: `FOO.BAR` only matches a key literally
/// named `FOO.BAR`.
pub fn extract_flat<'a>(value: &'a SecretValue, path: &KeyPath) -> Result<&'a SecretValue> {
    if path.is_empty() {
        return Ok(value);
    }

    value
        .as_mapping()
        .and_then(|map| map.get(path.as_str()))
        .ok_or_else(|| SecretError::DotenvKeyNotFound {
            key: path.to_string(),
        })
}

/// Looks up `section.key`, or `key` in the default section.
///
/// Only the first dot separates section from key.
pub fn extract_ini<'a>(value: &'a SecretValue, path: &KeyPath) -> Result<&'a SecretValue> {
    if path.is_empty() {
        return Ok(value);
    }

    let (section, key) = path.ini_parts();
    let keys = value
        .as_mapping()
        .and_then(|sections| sections.get(section))
        .and_then(SecretValue::as_mapping)
        .ok_or_else(|| SecretError::SectionNotFound {
            section: section.to_string(),
        })?;

    keys.get(key).ok_or_else(|| SecretError::IniKeyNotFound {
        key: key.to_string(),
        section: section.to_string(),
    })
}

/// Applies the lookup rule for `format`.
///
/// # Examples
///
/// ```rust
/// use sops_read_secret::adapters::DotenvDecoder;
/// use sops_read_secret::domain::{FormatTag, KeyPath};
/// use sops_read_secret::ports::SecretDecoder;
/// use sops_read_secret::service::extract::extract_for_format;
///
/// let doc = DotenvDecoder::new().decode(b"FOO=bar\nBAZ=qux").unwrap();
/// let value = extract_for_format(FormatTag::Dotenv, &doc, &KeyPath::from("FOO")).unwrap();
/// assert_eq!(value.as_str(), Some("bar"));
/// assert!(extract_for_format(FormatTag::Dotenv, &doc, &KeyPath::from("FOO.BAR")).is_err());
/// ```
pub fn extract_for_format<'a>(
    format: FormatTag,
    value: &'a SecretValue,
    path: &KeyPath,
) -> Result<&'a SecretValue> {
    if path.is_empty() {
        return Ok(value);
    }

    match format {
        FormatTag::Binary => {
            warn!(target: NOTICE_TARGET, key = %path, "--key is ignored for binary format");
            Ok(value)
        }
        FormatTag::Yaml | FormatTag::Json => extract(value, path),
        FormatTag::Dotenv => extract_flat(value, path),
        FormatTag::Ini => extract_ini(value, path),
    }
}
