// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output sink trait definition.

use crate::domain::Result;

/// Destination for the rendered result.
///
/// Sinks write the bytes exactly as given, with no added framing.
pub trait OutputSink {
    /// Writes the whole result.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;
}

impl OutputSink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_appends() {
        let mut sink: Vec<u8> = Vec::new();
        OutputSink::write(&mut sink, b"abc").unwrap();
        OutputSink::write(&mut sink, b"def").unwrap();
        assert_eq!(sink, b"abcdef");
    }
}
