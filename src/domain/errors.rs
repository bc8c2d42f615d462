// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for reading secrets.
//!
//! Every stage of a read (argument handling, file I/O, decryption, parsing,
//! key extraction and serialization) reports failures through [`SecretError`].
//! All errors are terminal: the binary prints them and exits non-zero.

use crate::domain::format::FormatTag;
use thiserror::Error;

/// The main error type for secret reading operations.
///
/// # Examples
///
/// ```
/// use sops_read_secret::domain::errors::SecretError;
///
/// let err = SecretError::KeyNotFound {
///     key: "database.password".to_string(),
/// };
/// assert_eq!(err.to_string(), "key 'database.password' not found");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SecretError {
    /// A required command-line flag was not supplied.
    #[error("--{name} is required")]
    MissingArgument {
        /// The flag name, without leading dashes
        name: String,
    },

    /// The requested format is not one of the supported tags.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat {
        /// The format string as given
        format: String,
    },

    /// Reading the input or writing the output failed.
    #[error("{context}: {source}")]
    Io {
        /// What was being done when the error occurred
        context: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The decrypt collaborator rejected the input.
    #[error("failed to decrypt file: {message}")]
    Decrypt {
        /// The message reported by the decryptor
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The decrypt program could not be started.
    #[error("decrypt program '{program}' was not found; install sops or pass --sops-binary")]
    DecryptorUnavailable {
        /// The program that was looked up
        program: String,
    },

    /// The decrypted plaintext could not be parsed in the declared format.
    #[error("failed to parse {format}: {message}")]
    Parse {
        /// The format that was being parsed
        format: FormatTag,
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An intermediate segment of a dotted path is absent or not a mapping.
    #[error("key path '{path}' not found")]
    PathNotFound {
        /// The path up to and including the failing segment
        path: String,
        /// Zero-based index of the failing segment
        segment_index: usize,
    },

    /// The final segment of a dotted path is absent.
    #[error("key '{key}' not found")]
    KeyNotFound {
        /// The full dotted path
        key: String,
    },

    /// A flat dotenv lookup missed.
    #[error("Key '{key}' not found in dotenv file")]
    DotenvKeyNotFound {
        /// The key as given
        key: String,
    },

    /// The INI section named by the path does not exist.
    #[error("Section '{section}' not found in INI file")]
    SectionNotFound {
        /// The section name
        section: String,
    },

    /// The INI section exists but does not contain the key.
    #[error("Key '{key}' not found in section '{section}'")]
    IniKeyNotFound {
        /// The key name
        key: String,
        /// The section name
        section: String,
    },

    /// The result could not be serialized.
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SecretError {
    /// Creates an I/O error annotated with what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        SecretError::Io {
            context: context.into(),
            source,
        }
    }

    /// Creates a parse error for `format` from any error type.
    pub fn parse<E>(format: FormatTag, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SecretError::Parse {
            format,
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Returns true for errors raised while navigating a key path.
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            SecretError::PathNotFound { .. }
                | SecretError::KeyNotFound { .. }
                | SecretError::DotenvKeyNotFound { .. }
                | SecretError::SectionNotFound { .. }
                | SecretError::IniKeyNotFound { .. }
        )
    }

    /// Formats the error with every cause in its source chain.
    ///
    /// A cause whose text already appears in the message is skipped, so a
    /// wrapped error is printed once.
    ///
    /// # Examples
    ///
    /// ```
    /// use sops_read_secret::domain::SecretError;
    /// use std::io;
    ///
    /// let err = SecretError::io("could not read sops file", io::Error::other("denied"));
    /// assert_eq!(err.report(), "could not read sops file: denied");
    /// ```
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            let text = err.to_string();
            if !report.contains(&text) {
                report.push_str(": ");
                report.push_str(&text);
            }
            cause = std::error::Error::source(err);
        }
        report
    }

    /// Process exit status for this error. Never zero.
    pub fn exit_code(&self) -> u8 {
        match self {
            SecretError::MissingArgument { .. } | SecretError::UnsupportedFormat { .. } => 2,
            _ => 1,
        }
    }
}

/// A specialized Result type for secret reading operations.
pub type Result<T> = std::result::Result<T, SecretError>;
