// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoder trait definition.
//!
//! This module defines the `SecretDecoder` trait, which turns decrypted bytes
//! into a [`SecretValue`] tree for one [`FormatTag`].

use crate::domain::{FormatTag, Result, SecretValue};

/// A trait for parsing decrypted plaintext.
///
/// Implementations never return a partial result: either the whole document
/// parses or a `Parse` error is returned.
///
/// # Examples
///
/// ```rust
/// use sops_read_secret::domain::{FormatTag, Result, SecretValue};
/// use sops_read_secret::ports::SecretDecoder;
///
/// struct UpperDecoder;
///
/// impl SecretDecoder for UpperDecoder {
///     fn decode(&self, plaintext: &[u8]) -> Result<SecretValue> {
///         Ok(SecretValue::from(String::from_utf8_lossy(plaintext).to_uppercase()))
///     }
///
///     fn format(&self) -> FormatTag {
///         FormatTag::Binary
///     }
/// }
///
/// let value = UpperDecoder.decode(b"abc").unwrap();
/// assert_eq!(value.as_str(), Some("ABC"));
/// ```
pub trait SecretDecoder {
    /// Parses decrypted plaintext into a value tree.
    ///
    /// # Returns
    ///
    /// * `Ok(SecretValue)` - The decoded document
    /// * `Err(SecretError::Parse)` - The plaintext is not valid for this format
    fn decode(&self, plaintext: &[u8]) -> Result<SecretValue>;

    /// Returns the format this decoder handles.
    fn format(&self) -> FormatTag;
}
