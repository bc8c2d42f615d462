// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the value model, key paths, format tags and errors. It
//! has no knowledge of sops, files or the command line.

pub mod errors;
pub mod format;
pub mod key_path;
pub mod value;

// Re-export commonly used types
pub use errors::{Result, SecretError};
pub use format::FormatTag;
pub use key_path::KeyPath;
pub use value::{Mapping, SecretValue};
