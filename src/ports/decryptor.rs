// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decryptor trait definition.
//!
//! The cryptography lives outside this crate. A `Decryptor` is the seam where
//! the external collaborator is called.

use crate::domain::{FormatTag, Result};

/// Decrypts a whole encrypted file.
///
/// The format is a hint for the collaborator, which needs to know how the
/// encrypted document is structured.
///
/// # Examples
///
/// ```rust
/// use sops_read_secret::domain::{FormatTag, Result};
/// use sops_read_secret::ports::Decryptor;
///
/// struct Plaintext;
///
/// impl Decryptor for Plaintext {
///     fn decrypt(&self, ciphertext: &[u8], _format: FormatTag) -> Result<Vec<u8>> {
///         Ok(ciphertext.to_vec())
///     }
/// }
///
/// let out = Plaintext.decrypt(b"a: 1", FormatTag::Yaml).unwrap();
/// assert_eq!(out, b"a: 1");
/// ```
pub trait Decryptor {
    /// Decrypts `ciphertext`, returning the plaintext bytes.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The decrypted document
    /// * `Err(SecretError::Decrypt)` - The collaborator failed
    fn decrypt(&self, ciphertext: &[u8], format: FormatTag) -> Result<Vec<u8>>;
}

impl<T: Decryptor + ?Sized> Decryptor for Box<T> {
    fn decrypt(&self, ciphertext: &[u8], format: FormatTag) -> Result<Vec<u8>> {
        (**self).decrypt(ciphertext, format)
    }
}
