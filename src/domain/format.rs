// SPDX-License-Identifier: MIT OR Apache-2.0

//! The declared format of a secrets file.

use crate::domain::errors::{Result, SecretError};
use std::fmt;
use std::str::FromStr;

/// Selects how decrypted bytes are parsed.
///
/// The lower-case tag is also what gets passed to sops as the input and
/// output type.
///
/// # Examples
///
/// ```
/// use sops_read_secret::domain::FormatTag;
///
/// let format: FormatTag = "dotenv".parse().unwrap();
/// assert_eq!(format, FormatTag::Dotenv);
/// assert_eq!(format.as_str(), "dotenv");
/// assert!("toml".parse::<FormatTag>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FormatTag {
    /// YAML document with a mapping at the top level
    #[default]
    Yaml,
    /// JSON object, parsed by the YAML decoder
    Json,
    /// Opaque text, never parsed
    Binary,
    /// `KEY=VALUE` lines
    Dotenv,
    /// INI sections
    Ini,
}

impl FormatTag {
    /// All supported formats.
    pub const ALL: [FormatTag; 5] = [
        FormatTag::Yaml,
        FormatTag::Json,
        FormatTag::Binary,
        FormatTag::Dotenv,
        FormatTag::Ini,
    ];

    /// Returns the lower-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Yaml => "yaml",
            FormatTag::Json => "json",
            FormatTag::Binary => "binary",
            FormatTag::Dotenv => "dotenv",
            FormatTag::Ini => "ini",
        }
    }
}

impl FromStr for FormatTag {
    type Err = SecretError;

    fn from_str(s: &str) -> Result<Self> {
        FormatTag::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| SecretError::UnsupportedFormat {
                format: s.to_string(),
            })
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
