// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binary passthrough decoder.

use crate::domain::{FormatTag, Result, SecretValue};
use crate::ports::SecretDecoder;

/// Treats the plaintext as opaque bytes.
///
/// Nothing is parsed, so decoding never fails, and the bytes are rendered
/// back exactly as they were decrypted, whether or not they are UTF-8.
#[derive(Debug, Clone, Default)]
pub struct BinaryDecoder;

impl BinaryDecoder {
    /// Creates a new binary decoder.
    pub fn new() -> Self {
        BinaryDecoder
    }
}

impl SecretDecoder for BinaryDecoder {
    fn decode(&self, plaintext: &[u8]) -> Result<SecretValue> {
        Ok(SecretValue::Bytes(plaintext.to_vec()))
    }

    fn format(&self) -> FormatTag {
        FormatTag::Binary
    }
}
