// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output sink adapters for standard output and files.

use crate::domain::{Result, SecretError};
use crate::ports::OutputSink;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes the result to standard output, unchanged.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(bytes)
            .and_then(|_| stdout.flush())
            .map_err(|e| SecretError::io("could not write to stdout", e))
    }
}

/// Writes the result to a file, creating missing parent directories.
///
/// An existing file is replaced.
///
/// # Examples
///
/// ```rust,no_run
/// use sops_read_secret::adapters::FileSink;
/// use sops_read_secret::ports::OutputSink;
///
/// let mut sink = FileSink::new("/run/secrets/db/password");
/// sink.write(b"hunter2").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Creates a sink for `path`. Nothing is touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileSink {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| SecretError::io("could not create output directory", e))?;
        }

        fs::write(&self.path, bytes).map_err(|e| SecretError::io("could not write output", e))?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "wrote output file");
        Ok(())
    }
}
