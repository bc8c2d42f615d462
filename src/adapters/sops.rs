// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decryptor adapter backed by the `sops` executable.
//!
//! The ciphertext is piped to `sops --decrypt` on stdin and the plaintext is
//! read back from stdout. Key material locations are handed to the child
//! process through its environment only; the parent environment is never
//! modified.

use crate::domain::{FormatTag, Result, SecretError};
use crate::ports::Decryptor;
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// Program run when no other binary is configured.
pub const DEFAULT_SOPS_BINARY: &str = "sops";

/// Environment variable read by sops for the GnuPG home directory.
pub const GNUPG_HOME_ENV: &str = "GNUPGHOME";

/// Environment variable read by sops for the age identity file.
pub const AGE_KEY_FILE_ENV: &str = "SOPS_AGE_KEY_FILE";

/// Environment variable read by sops for the SSH private key.
pub const SSH_KEY_PATH_ENV: &str = "SOPS_SSH_KEY_PATH";

/// Locations of key material used by sops.
///
/// Unset fields leave whatever the inherited environment provides.
///
/// # Examples
///
/// ```rust
/// use sops_read_secret::adapters::KeyMaterial;
///
/// let keys = KeyMaterial {
///     age_key_file: Some("/run/keys/age.txt".into()),
///     ..Default::default()
/// };
/// let env: Vec<_> = keys.env_vars().collect();
/// assert_eq!(env.len(), 1);
/// assert_eq!(env[0].0, "SOPS_AGE_KEY_FILE");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMaterial {
    /// GnuPG home directory
    pub gnupg_home: Option<PathBuf>,
    /// age key file
    pub age_key_file: Option<PathBuf>,
    /// SSH private key path
    pub ssh_key_path: Option<PathBuf>,
}

impl KeyMaterial {
    /// Returns the environment variables to set on the sops process.
    pub fn env_vars(&self) -> impl Iterator<Item = (&'static str, OsString)> + '_ {
        [
            (GNUPG_HOME_ENV, &self.gnupg_home),
            (AGE_KEY_FILE_ENV, &self.age_key_file),
            (SSH_KEY_PATH_ENV, &self.ssh_key_path),
        ]
        .into_iter()
        .filter_map(|(name, path)| path.as_ref().map(|p| (name, p.clone().into_os_string())))
    }
}

/// Decrypts files by running sops.
///
/// # Examples
///
/// ```rust,no_run
/// use sops_read_secret::adapters::{KeyMaterial, SopsDecryptor};
/// use sops_read_secret::domain::FormatTag;
/// use sops_read_secret::ports::Decryptor;
///
/// let decryptor = SopsDecryptor::new(KeyMaterial::default());
/// let ciphertext = std::fs::read("secrets.enc.yaml").unwrap();
/// let plaintext = decryptor.decrypt(&ciphertext, FormatTag::Yaml).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SopsDecryptor {
    program: PathBuf,
    keys: KeyMaterial,
}

impl SopsDecryptor {
    /// Creates a decryptor that runs `sops` from `PATH`.
    pub fn new(keys: KeyMaterial) -> Self {
        Self::with_program(DEFAULT_SOPS_BINARY, keys)
    }

    /// Creates a decryptor that runs the given program.
    pub fn with_program(program: impl Into<PathBuf>, keys: KeyMaterial) -> Self {
        Self {
            program: program.into(),
            keys,
        }
    }

    /// Returns the key material handed to sops.
    pub fn keys(&self) -> &KeyMaterial {
        &self.keys
    }

    /// Builds the sops invocation for `format`.
    pub fn command(&self, format: FormatTag) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args([
            "--decrypt",
            "--input-type",
            format.as_str(),
            "--output-type",
            format.as_str(),
            "/dev/stdin",
        ]);
        cmd.envs(self.keys.env_vars());
        cmd
    }
}

impl Decryptor for SopsDecryptor {
    fn decrypt(&self, ciphertext: &[u8], format: FormatTag) -> Result<Vec<u8>> {
        let program = self.program.display().to_string();
        debug!(program = %program, format = %format, "running sops");

        let mut child = match self
            .command(format)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SecretError::DecryptorUnavailable { program });
            }
            Err(e) => return Err(SecretError::io(format!("could not start {}", program), e)),
        };

        if let Some(mut stdin) = child.stdin.take() {
            // sops may exit before reading everything; its status reports why.
            match stdin.write_all(ciphertext) {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => {
                    return Err(SecretError::io(format!("could not write to {}", program), e));
                }
                _ => {}
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| SecretError::io(format!("could not wait for {}", program), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("{} exited with {}", program, output.status)
            } else {
                stderr
            };
            return Err(SecretError::Decrypt {
                message,
                source: None,
            });
        }

        debug!(bytes = output.stdout.len(), "sops decrypted file");
        Ok(output.stdout)
    }
}
