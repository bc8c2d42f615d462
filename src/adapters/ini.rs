// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI decoder adapter.
//!
//! Produces a two-level mapping of section name to key/value pairs. Keys that
//! appear before any `[section]` header belong to the default section, which
//! is stored under the empty name and is always present.

use crate::domain::{FormatTag, Mapping, Result, SecretError, SecretValue};
use crate::ports::SecretDecoder;
use ini::{Ini, ParseOption};

/// Name under which keys outside any section are stored.
pub const DEFAULT_SECTION: &str = "";

/// INI decoder implementation.
///
/// # Examples
///
/// ```rust
/// use sops_read_secret::adapters::IniDecoder;
/// use sops_read_secret::ports::SecretDecoder;
///
/// let value = IniDecoder::new().decode(b"debug=true\n[web]\nport=8080\n").unwrap();
/// let sections = value.as_mapping().unwrap();
/// assert_eq!(sections["web"].as_mapping().unwrap()["port"].as_str(), Some("8080"));
/// assert_eq!(sections[""].as_mapping().unwrap()["debug"].as_str(), Some("true"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniDecoder;

impl IniDecoder {
    /// Creates a new INI decoder.
    pub fn new() -> Self {
        IniDecoder
    }
}

impl SecretDecoder for IniDecoder {
    fn decode(&self, plaintext: &[u8]) -> Result<SecretValue> {
        let text =
            std::str::from_utf8(plaintext).map_err(|e| SecretError::parse(FormatTag::Ini, e))?;
        // Backslashes are part of the value, not escape sequences.
        let options = ParseOption {
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(text, options)
            .map_err(|e| SecretError::parse(FormatTag::Ini, e))?;

        let mut sections = Mapping::new();
        sections.insert(
            DEFAULT_SECTION.to_string(),
            SecretValue::Mapping(Mapping::new()),
        );

        // Repeated sections merge; a repeated key keeps its last value.
        for (name, properties) in ini.iter() {
            let entry = sections
                .entry(name.unwrap_or(DEFAULT_SECTION).to_string())
                .or_insert_with(|| SecretValue::Mapping(Mapping::new()));
            if let SecretValue::Mapping(keys) = entry {
                for (key, value) in properties.iter() {
                    keys.insert(key.to_string(), SecretValue::from(value));
                }
            }
        }

        Ok(SecretValue::Mapping(sections))
    }

    fn format(&self) -> FormatTag {
        FormatTag::Ini
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(content: &str) -> Mapping {
        IniDecoder::new()
            .decode(content.as_bytes())
            .unwrap()
            .as_mapping()
            .cloned()
            .unwrap()
    }

    fn section<'a>(sections: &'a Mapping, name: &str) -> &'a Mapping {
        sections[name].as_mapping().unwrap()
    }

    #[test]
    fn test_sections_and_default() {
        let sections = decode("debug=true\n[web]\nport=8080\nhost=0.0.0.0\n");
        assert_eq!(section(&sections, "")["debug"].as_str(), Some("true"));
        assert_eq!(section(&sections, "web")["port"].as_str(), Some("8080"));
        assert_eq!(section(&sections, "web")["host"].as_str(), Some("0.0.0.0"));
    }

    #[test]
    fn test_default_section_always_present() {
        let sections = decode("[db]\nuser=admin\n");
        assert!(section(&sections, DEFAULT_SECTION).is_empty());
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_comments_are_skipped() {
        let sections = decode("; leading\n[db]\n# note\npassword=s3cret\n");
        assert_eq!(section(&sections, "db").len(), 1);
        assert_eq!(section(&sections, "db")["password"].as_str(), Some("s3cret"));
    }

    #[test]
    fn test_values_are_strings() {
        let sections = decode("[limits]\nmax=10\nenabled=false\n");
        assert_eq!(section(&sections, "limits")["max"], SecretValue::from("10"));
        assert_eq!(
            section(&sections, "limits")["enabled"],
            SecretValue::from("false")
        );
    }

    #[test]
    fn test_backslashes_are_literal() {
        let sections = decode("[db]\npassword=p\\ta\\nss\npath=C:\\secrets\\db\n");
        let db = section(&sections, "db");
        assert_eq!(db["password"].as_str().unwrap().as_bytes(), br"p\ta\nss");
        assert_eq!(db["path"].as_str(), Some(r"C:\secrets\db"));
    }

    #[test]
    fn test_empty_input() {
        let sections = decode("");
        assert_eq!(sections.len(), 1);
        assert!(section(&sections, "").is_empty());
    }

    #[test]
    fn test_invalid_utf8() {
        let err = IniDecoder::new().decode(&[b'[', 0xff, b']']).unwrap_err();
        assert!(matches!(err, SecretError::Parse { format: FormatTag::Ini, .. }));
    }

    #[test]
    fn test_unclosed_section_header() {
        let err = IniDecoder::new().decode(b"[web\nport=1\n").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse ini"));
    }
}
