// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decrypt a sops-encrypted secrets file and optionally extract one value.
//!
//! This crate backs the `sops-read-secret` command. A run reads the encrypted
//! file, hands it to sops for decryption, parses the plaintext in its declared
//! format, optionally follows a dotted key path into the result, and writes
//! either raw text or indented JSON.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`SecretValue`, `KeyPath`, `FormatTag`, errors)
//! - **Ports**: Trait definitions for the seams (`SecretDecoder`, `Decryptor`, `OutputSink`)
//! - **Adapters**: Format decoders, the sops decryptor, output sinks, CLI flags
//! - **Service**: Key extraction and the read pipeline
//!
//! # Formats
//!
//! | Format   | Decoded shape                          | Key lookup                     |
//! |----------|----------------------------------------|--------------------------------|
//! | `yaml`   | nested mapping                         | dotted walk                    |
//! | `json`   | nested mapping                         | dotted walk                    |
//! | `dotenv` | flat mapping of strings                | exact match on the whole key   |
//! | `ini`    | section -> key -> string               | `section.key` or `key`         |
//! | `binary` | raw bytes, unchanged                   | ignored, with a warning        |
//!
//! # Feature Flags
//!
//! - `cli`: Enable command-line parsing and the binary (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sops_read_secret::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let reader = SecretReader::new(SopsDecryptor::new(KeyMaterial::default()));
//! let request = ReadRequest::new("secrets.enc.yaml", FormatTag::Yaml).with_key("db.password");
//! let password = reader.read(&request)?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::adapters::{decoder_for, FileSink, KeyMaterial, SopsDecryptor, StdoutSink};
    pub use crate::domain::{FormatTag, KeyPath, Mapping, Result, SecretError, SecretValue};
    pub use crate::ports::{Decryptor, OutputSink, SecretDecoder};
    pub use crate::service::{ReadRequest, SecretReader};

    #[cfg(feature = "cli")]
    pub use crate::adapters::Cli;
}
