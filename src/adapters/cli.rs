// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line argument adapter.
//!
//! Flags are parsed with `clap` before any other work happens. Empty flag
//! values are treated the same as absent ones.

use crate::adapters::sops::{KeyMaterial, SopsDecryptor, DEFAULT_SOPS_BINARY};
use crate::domain::{FormatTag, KeyPath, Result, SecretError};
use crate::service::ReadRequest;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Command-line flags.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use sops_read_secret::adapters::Cli;
/// use sops_read_secret::domain::FormatTag;
///
/// let cli = Cli::try_parse_from([
///     "sops-read-secret", "--file", "secrets.env", "--format", "dotenv", "--key", "API_TOKEN",
/// ]).unwrap();
/// let request = cli.request().unwrap();
/// assert_eq!(request.format, FormatTag::Dotenv);
/// assert_eq!(request.key.as_str(), "API_TOKEN");
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sops-read-secret",
    version,
    about = "Decrypt a sops file and print it, or a single value from it"
)]
pub struct Cli {
    /// Path to the sops encrypted file
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Dotted key path to extract from the decrypted content
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,

    /// Format of the sops file (yaml, json, binary, dotenv, ini)
    #[arg(long, default_value = "yaml")]
    pub format: String,

    /// GPG home directory
    #[arg(long, value_name = "DIR")]
    pub gnupg_home: Option<String>,

    /// Age key file path
    #[arg(long, value_name = "PATH")]
    pub age_key_file: Option<String>,

    /// SSH key path
    #[arg(long, value_name = "PATH")]
    pub ssh_key_path: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// sops executable used for decryption
    #[arg(long, env = "SOPS_BINARY", default_value = DEFAULT_SOPS_BINARY)]
    pub sops_binary: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn non_empty(value: &Option<String>) -> Option<PathBuf> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

impl Cli {
    /// Builds the read request, validating `--file` and `--format`.
    pub fn request(&self) -> Result<ReadRequest> {
        let file = non_empty(&self.file).ok_or_else(|| SecretError::MissingArgument {
            name: "file".to_string(),
        })?;
        let format: FormatTag = self.format.parse()?;

        Ok(ReadRequest {
            file,
            key: KeyPath::from(self.key.clone()),
            format,
            output: non_empty(&self.output),
        })
    }

    /// Key material locations for the decryptor.
    pub fn key_material(&self) -> KeyMaterial {
        KeyMaterial {
            gnupg_home: non_empty(&self.gnupg_home),
            age_key_file: non_empty(&self.age_key_file),
            ssh_key_path: non_empty(&self.ssh_key_path),
        }
    }

    /// Builds the sops decryptor configured by these flags.
    pub fn decryptor(&self) -> SopsDecryptor {
        SopsDecryptor::with_program(self.sops_binary.clone(), self.key_material())
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
