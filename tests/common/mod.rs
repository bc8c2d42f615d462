// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fakes and fixtures for integration tests.

use sops_read_secret::domain::{FormatTag, Result, SecretError};
use sops_read_secret::ports::Decryptor;
use std::cell::RefCell;
use std::io::Write;
use tempfile::NamedTempFile;

/// A decryptor that treats the file content as plaintext.
///
/// Records every call so tests can check the format hint and call count.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FakeDecryptor {
    failure: Option<String>,
    calls: RefCell<Vec<FormatTag>>,
}

#[allow(dead_code)]
impl FakeDecryptor {
    /// Creates a decryptor that returns its input unchanged.
    pub fn passthrough() -> Self {
        Self::default()
    }

    /// Creates a decryptor that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            calls: RefCell::default(),
        }
    }

    /// Formats passed to each call, in order.
    pub fn calls(&self) -> Vec<FormatTag> {
        self.calls.borrow().clone()
    }
}

impl Decryptor for FakeDecryptor {
    fn decrypt(&self, ciphertext: &[u8], format: FormatTag) -> Result<Vec<u8>> {
        self.calls.borrow_mut().push(format);
        match &self.failure {
            Some(message) => Err(SecretError::Decrypt {
                message: message.clone(),
                source: None,
            }),
            None => Ok(ciphertext.to_vec()),
        }
    }
}

/// Writes `content` to a fresh temporary file.
#[allow(dead_code)]
pub fn input_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}
