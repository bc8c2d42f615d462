// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the read pipeline and the outside
//! world: the decrypt collaborator, the format decoders and the output
//! destination. Implementations live in the adapters layer.

pub mod decoder;
pub mod decryptor;
pub mod sink;

// Re-export commonly used types
pub use decoder::SecretDecoder;
pub use decryptor::Decryptor;
pub use sink::OutputSink;
