// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing key extraction and the read pipeline.

pub mod extract;
pub mod reader;

// Re-export commonly used types
pub use extract::{extract, extract_flat, extract_for_format, extract_ini};
pub use reader::{ReadRequest, SecretReader};
