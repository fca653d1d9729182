//! Byte cursor for decoding sample streams.

use crate::codec::SampleCodec;
use crate::error::{VarintError, VarintResult};

/// A forward-only cursor over an encoded sample buffer.
///
/// All reads are bounds-checked. The reader never panics on malformed input;
/// running out of bytes in the middle of a sample is reported as
/// [`VarintError::MalformedStream`].
#[derive(Debug, Clone)]
pub struct SampleReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SampleReader<'a> {
    /// Creates a new `SampleReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the bytes not yet consumed.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    /// Reads the next byte, or `None` at the end of the buffer.
    pub fn read_u8(&mut self) -> Option<u8> {
        let byte = self.data.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    /// Reads one delta sample and folds it into `previous`.
    pub fn read_sample<C: SampleCodec>(&mut self, previous: i32) -> VarintResult<i32> {
        C::decode_one(self, previous)
    }

    /// Builds the error for a sample that started at `start` and ran off the end.
    pub(crate) const fn truncated(&self, start: usize) -> VarintError {
        VarintError::MalformedStream {
            position: start,
            consumed: self.pos.saturating_sub(start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Varint5, Varint7};

    #[test]
    fn empty_reader() {
        let reader = SampleReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = SampleReader::new(&[]);
        assert_eq!(reader.read_u8(), None);
        let err = reader.read_sample::<Varint5>(0).unwrap_err();
        assert_eq!(
            err,
            VarintError::MalformedStream {
                position: 0,
                consumed: 0
            }
        );
    }

    #[test]
    fn read_advances_position() {
        let mut reader = SampleReader::new(&[0xD8, 0x04, 0x01]);
        assert_eq!(reader.read_sample::<Varint7>(0).unwrap(), 300);
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.rest(), &[0x01]);
        assert_eq!(reader.read_sample::<Varint7>(300).unwrap(), 299);
        assert!(reader.is_empty());
    }

    #[test]
    fn truncated_sample_reports_start() {
        // 0x80 carries the continuation bit and nothing follows it.
        let mut reader = SampleReader::new(&[0x02, 0x80]);
        assert_eq!(reader.read_sample::<Varint7>(0).unwrap(), 1);
        let err = reader.read_sample::<Varint7>(1).unwrap_err();
        assert_eq!(
            err,
            VarintError::MalformedStream {
                position: 1,
                consumed: 1
            }
        );
    }
}
