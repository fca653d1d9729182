//! Variable-length sample codecs for the shapecodec polyline format.
//!
//! A *sample* is one coordinate value scaled to a fixed-point `i32`. Samples
//! travel as zig-zag folded deltas in one of two byte formats:
//!
//! - [`Varint5`]: the classic encoded polyline format, 5 bits per printable byte.
//! - [`Varint7`]: a denser binary format, 7 bits per byte.
//!
//! [`SampleWriter`] and [`SampleReader`] drive either codec over a byte buffer.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about points or precision.
//! - **Explicit errors** - Truncated input returns a structured error, never panics.
//!
//! # Example
//!
//! ```
//! use varint::{SampleReader, SampleWriter, Varint5};
//!
//! let mut writer = SampleWriter::new();
//! writer.write_sample::<Varint5>(3_850_000);
//! writer.write_sample::<Varint5>(-12_020_000);
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes, b"_p~iF~ps|U");
//!
//! let mut reader = SampleReader::new(&bytes);
//! assert_eq!(reader.read_sample::<Varint5>(0).unwrap(), 3_850_000);
//! assert_eq!(reader.read_sample::<Varint5>(0).unwrap(), -12_020_000);
//! assert!(reader.is_empty());
//! ```

mod codec;
mod error;
mod reader;
mod writer;
mod zigzag;

pub use codec::{SampleCodec, Varint5, Varint7, VARINT5_OFFSET};
pub use error::{VarintError, VarintResult};
pub use reader::SampleReader;
pub use writer::SampleWriter;
pub use zigzag::{zigzag_decode, zigzag_encode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = SampleWriter::new();
        let bytes = writer.finish();
        assert!(bytes.is_empty());

        let reader = SampleReader::new(&bytes);
        assert!(reader.is_empty());
    }

    #[test]
    fn delta_chain_roundtrip() {
        let values = [0, 5, 3, -40, 1_000_000, 999_999];
        let mut writer = SampleWriter::new();
        let mut last = 0;
        for value in values {
            writer.write_sample::<Varint7>(value - last);
            last = value;
        }
        let bytes = writer.finish();

        let mut reader = SampleReader::new(&bytes);
        let mut last = 0;
        for value in values {
            last = reader.read_sample::<Varint7>(last).unwrap();
            assert_eq!(last, value);
        }
        assert!(reader.is_empty());
    }

    #[test]
    fn mixed_sizes_roundtrip() {
        let deltas = [0, 31, -32, 1023, -1024, 32_767, i32::MAX, i32::MIN];
        let mut writer = SampleWriter::new();
        for delta in deltas {
            writer.write_sample::<Varint5>(delta);
        }
        let bytes = writer.finish();

        let mut reader = SampleReader::new(&bytes);
        for delta in deltas {
            assert_eq!(reader.read_sample::<Varint5>(0).unwrap(), delta);
        }
        assert!(reader.is_empty());
    }

    #[test]
    fn doctest_example() {
        let mut writer = SampleWriter::new();
        writer.write_sample::<Varint5>(3_850_000);
        writer.write_sample::<Varint5>(-12_020_000);

        let bytes = writer.finish();

        let mut reader = SampleReader::new(&bytes);
        assert_eq!(reader.read_sample::<Varint5>(0).unwrap(), 3_850_000);
        assert_eq!(reader.read_sample::<Varint5>(0).unwrap(), -12_020_000);
    }
}
