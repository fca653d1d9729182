//! Single-axis sample streams, such as elevation profiles.

use varint::{SampleCodec, SampleReader, SampleWriter, Varint7, VarintResult};

use crate::encode::scale;

/// Encodes a sequence of values as deltas with sample codec `C`.
pub fn encode_samples<C: SampleCodec>(values: &[f64], precision: i32) -> Vec<u8> {
    let mut writer = SampleWriter::with_capacity(values.len().saturating_mul(4));
    let factor = f64::from(precision);
    let mut last = 0i32;
    for &value in values {
        let sample = scale(value, factor);
        writer.write_sample::<C>(sample.wrapping_sub(last));
        last = sample;
    }
    writer.finish()
}

/// Decodes a delta sample stream written by [`encode_samples`].
///
/// # Errors
///
/// Returns [`VarintError::MalformedStream`](varint::VarintError::MalformedStream)
/// if the buffer ends inside a sample.
pub fn decode_samples<C: SampleCodec>(encoded: &[u8], precision: f64) -> VarintResult<Vec<f64>> {
    let mut reader = SampleReader::new(encoded);
    let mut values = Vec::new();
    let mut last = 0i32;
    while !reader.is_empty() {
        last = reader.read_sample::<C>(last)?;
        values.push(f64::from(last) * precision);
    }
    Ok(values)
}

/// Encodes a sequence of values in the 7-bit format.
///
/// # Example
///
/// ```
/// use shape::{decode7_samples, encode7_samples};
///
/// let heights = [10.5, 12.25, 11.0];
/// let encoded = encode7_samples(&heights, 100);
/// let decoded = decode7_samples(&encoded, 0.01).unwrap();
/// assert!(decoded.iter().zip(heights).all(|(a, b)| (a - b).abs() < 1e-9));
/// ```
pub fn encode7_samples(values: &[f64], precision: i32) -> Vec<u8> {
    encode_samples::<Varint7>(values, precision)
}

/// Decodes a 7-bit sample stream.
pub fn decode7_samples(encoded: &[u8], precision: f64) -> VarintResult<Vec<f64>> {
    decode_samples::<Varint7>(encoded, precision)
}
