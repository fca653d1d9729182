//! Byte writer for encoding sample streams.

use crate::codec::SampleCodec;

/// Accumulates encoded samples into a growable buffer.
///
/// Call [`finish`](Self::finish) to get the final byte buffer.
#[derive(Debug, Default)]
pub struct SampleWriter {
    bytes: Vec<u8>,
}

impl SampleWriter {
    /// Creates a new empty `SampleWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `SampleWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn bytes_written(&self) -> usize {
        self.bytes.len()
    }

    /// Writes one delta sample with codec `C`.
    pub fn write_sample<C: SampleCodec>(&mut self, delta: i32) {
        C::encode_one(delta, &mut self.bytes);
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}
