// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! Decoders for each supported format, the sops-backed decryptor, output
//! sinks and the command-line flags live here.

pub mod binary;
#[cfg(feature = "cli")]
pub mod cli;
pub mod dotenv;
pub mod ini;
pub mod output;
pub mod sops;
pub mod yaml;

use crate::domain::FormatTag;
use crate::ports::SecretDecoder;

pub use binary::BinaryDecoder;
#[cfg(feature = "cli")]
pub use cli::Cli;
pub use dotenv::DotenvDecoder;
pub use ini::IniDecoder;
pub use output::{FileSink, StdoutSink};
pub use sops::{KeyMaterial, SopsDecryptor};
pub use yaml::YamlDecoder;

/// Returns the decoder for `format`.
///
/// # Examples
///
/// ```rust
/// use sops_read_secret::adapters::decoder_for;
/// use sops_read_secret::domain::FormatTag;
/// use sops_read_secret::ports::SecretDecoder;
///
/// for format in FormatTag::ALL {
///     assert_eq!(decoder_for(format).format(), format);
/// }
/// ```
pub fn decoder_for(format: FormatTag) -> Box<dyn SecretDecoder> {
    match format {
        FormatTag::Yaml => Box::new(YamlDecoder::new()),
        FormatTag::Json => Box::new(YamlDecoder::json()),
        FormatTag::Binary => Box::new(BinaryDecoder::new()),
        FormatTag::Dotenv => Box::new(DotenvDecoder::new()),
        FormatTag::Ini => Box::new(IniDecoder::new()),
    }
}
