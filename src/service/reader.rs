// SPDX-License-Identifier: MIT OR Apache-2.0

//! The read pipeline: read, decrypt, decode, extract, render, write.

use crate::adapters::{decoder_for, FileSink, StdoutSink};
use crate::domain::{FormatTag, KeyPath, Result, SecretError, SecretValue};
use crate::ports::{Decryptor, OutputSink};
use crate::service::extract::extract_for_format;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// One invocation's worth of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    /// Encrypted input file
    pub file: PathBuf,
    /// Optional key path; empty means the whole document
    pub key: KeyPath,
    /// Declared format of the file
    pub format: FormatTag,
    /// Destination file; `None` writes to standard output
    pub output: Option<PathBuf>,
}

impl ReadRequest {
    /// Creates a request for the whole document, written to stdout.
    pub fn new(file: impl Into<PathBuf>, format: FormatTag) -> Self {
        Self {
            file: file.into(),
            key: KeyPath::default(),
            format,
            output: None,
        }
    }

    /// Sets the key path to extract.
    pub fn with_key(mut self, key: impl Into<KeyPath>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets the output file.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// Runs the read pipeline against a decryptor.
///
/// The decryptor is called exactly once per read.
///
/// # Examples
///
/// ```rust
/// use sops_read_secret::domain::{FormatTag, Result};
/// use sops_read_secret::ports::Decryptor;
/// use sops_read_secret::service::SecretReader;
///
/// struct Plaintext;
///
/// impl Decryptor for Plaintext {
///     fn decrypt(&self, ciphertext: &[u8], _format: FormatTag) -> Result<Vec<u8>> {
///         Ok(ciphertext.to_vec())
///     }
/// }
///
/// let reader = SecretReader::new(Plaintext);
/// let out = reader
///     .process(b"db:\n  password: hunter2\n", FormatTag::Yaml, &"db.password".into())
///     .unwrap();
/// assert_eq!(out, b"hunter2");
/// ```
#[derive(Debug, Clone)]
pub struct SecretReader<D> {
    decryptor: D,
}

impl<D: Decryptor> SecretReader<D> {
    /// Creates a reader backed by `decryptor`.
    pub fn new(decryptor: D) -> Self {
        Self { decryptor }
    }

    /// Returns the decryptor.
    pub fn decryptor(&self) -> &D {
        &self.decryptor
    }

    /// Decrypts and decodes `ciphertext` into a value tree.
    pub fn decode(&self, ciphertext: &[u8], format: FormatTag) -> Result<SecretValue> {
        let plaintext = self.decryptor.decrypt(ciphertext, format)?;
        debug!(format = %format, bytes = plaintext.len(), "decrypted");

        let value = decoder_for(format).decode(&plaintext)?;
        debug!(format = %format, "decoded");
        Ok(value)
    }

    /// Decrypts, decodes, extracts and renders `ciphertext`.
    pub fn process(
        &self,
        ciphertext: &[u8],
        format: FormatTag,
        key: &KeyPath,
    ) -> Result<Vec<u8>> {
        let value = self.decode(ciphertext, format)?;
        let selected = extract_for_format(format, &value, key)?;
        if !key.is_empty() {
            debug!(key = %key, "extracted");
        }
        selected.render()
    }

    /// Reads the request's input file and returns the rendered result.
    pub fn read(&self, request: &ReadRequest) -> Result<Vec<u8>> {
        let ciphertext = fs::read(&request.file)
            .map_err(|e| SecretError::io("could not read sops file", e))?;
        debug!(file = %request.file.display(), bytes = ciphertext.len(), "read sops file");

        self.process(&ciphertext, request.format, &request.key)
    }

    /// Reads the request and writes the result to `sink`.
    pub fn run_with_sink(&self, request: &ReadRequest, sink: &mut dyn OutputSink) -> Result<()> {
        let output = self.read(request)?;
        sink.write(&output)
    }

    /// Reads the request and writes the result to its output file, or to
    /// standard output when none is set.
    pub fn run(&self, request: &ReadRequest) -> Result<()> {
        match &request.output {
            Some(path) => self.run_with_sink(request, &mut FileSink::new(path)),
            None => self.run_with_sink(request, &mut StdoutSink),
        }
    }
}
