//! Per-sample variable-length codecs.
//!
//! Both formats zig-zag fold the sign and emit the magnitude in fixed-width
//! chunks, least significant chunk first, with a continuation flag on every
//! byte except the last one of a sample.
//!
//! | Codec | Bits/byte | Byte layout | Text-safe |
//! |---|---|---|---|
//! | [`Varint5`] | 5 | `((cont << 5) \| chunk) + 63` | yes, ASCII 63..=126 |
//! | [`Varint7`] | 7 | `(cont << 7) \| chunk` | no |

use crate::error::VarintResult;
use crate::reader::SampleReader;
use crate::zigzag::{zigzag_decode, zigzag_encode};

/// A strategy for encoding and decoding one signed delta sample.
///
/// Implementations are zero-sized marker types; decoders and encoders are
/// generic over the codec so the surrounding delta logic is shared.
pub trait SampleCodec {
    /// Short human-readable name of the format.
    const NAME: &'static str;

    /// Whether every emitted byte is printable ASCII.
    const TEXT_SAFE: bool;

    /// Appends the encoding of `delta` to `out`.
    fn encode_one(delta: i32, out: &mut Vec<u8>);

    /// Decodes one delta from `reader` and adds it to `previous`.
    ///
    /// # Errors
    ///
    /// Returns [`VarintError::MalformedStream`](crate::VarintError::MalformedStream)
    /// if the buffer ends before a terminating byte.
    fn decode_one(reader: &mut SampleReader<'_>, previous: i32) -> VarintResult<i32>;
}

/// The classic "encoded polyline" format: 5 payload bits per printable byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Varint5;

/// Offset added to every Varint5 byte so the output stays printable.
pub const VARINT5_OFFSET: u8 = 63;

const VARINT5_CONTINUATION: u32 = 0x20;
const VARINT5_MASK: u32 = 0x1F;

impl SampleCodec for Varint5 {
    const NAME: &'static str = "varint5";
    const TEXT_SAFE: bool = true;

    #[allow(clippy::cast_possible_truncation)]
    fn encode_one(delta: i32, out: &mut Vec<u8>) {
        let mut value = zigzag_encode(delta);
        while value >= VARINT5_CONTINUATION {
            let chunk = (VARINT5_CONTINUATION | (value & VARINT5_MASK)) as u8;
            out.push(chunk + VARINT5_OFFSET);
            value >>= 5;
        }
        out.push(value as u8 + VARINT5_OFFSET);
    }

    #[allow(clippy::cast_sign_loss)]
    fn decode_one(reader: &mut SampleReader<'_>, previous: i32) -> VarintResult<i32> {
        let start = reader.position();
        let mut result = 0u32;
        let mut shift = 0u32;
        loop {
            let Some(byte) = reader.read_u8() else {
                return Err(reader.truncated(start));
            };
            // Bytes below the offset go negative and end the sample.
            let chunk = i32::from(byte) - i32::from(VARINT5_OFFSET);
            let bits = (chunk as u32) & VARINT5_MASK;
            result |= bits.checked_shl(shift).unwrap_or(0);
            shift = shift.saturating_add(5);
            if chunk < VARINT5_CONTINUATION as i32 {
                break;
            }
        }
        Ok(previous.wrapping_add(zigzag_decode(result)))
    }
}

/// A dense binary format: 7 payload bits per byte, high bit as continuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Varint7;

const VARINT7_CONTINUATION: u8 = 0x80;
const VARINT7_MASK: u32 = 0x7F;

impl SampleCodec for Varint7 {
    const NAME: &'static str = "varint7";
    const TEXT_SAFE: bool = false;

    #[allow(clippy::cast_possible_truncation)]
    fn encode_one(delta: i32, out: &mut Vec<u8>) {
        let mut value = zigzag_encode(delta);
        while value > VARINT7_MASK {
            out.push(VARINT7_CONTINUATION | (value & VARINT7_MASK) as u8);
            value >>= 7;
        }
        out.push((value & VARINT7_MASK) as u8);
    }

    fn decode_one(reader: &mut SampleReader<'_>, previous: i32) -> VarintResult<i32> {
        let start = reader.position();
        let mut result = 0u32;
        let mut shift = 0u32;
        loop {
            let Some(byte) = reader.read_u8() else {
                return Err(reader.truncated(start));
            };
            let bits = u32::from(byte) & VARINT7_MASK;
            result |= bits.checked_shl(shift).unwrap_or(0);
            shift = shift.saturating_add(7);
            if byte & VARINT7_CONTINUATION == 0 {
                break;
            }
        }
        Ok(previous.wrapping_add(zigzag_decode(result)))
    }
}
