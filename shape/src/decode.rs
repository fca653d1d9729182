//! Decoding whole buffers into containers.

use varint::{SampleCodec, Varint5, Varint7, VarintResult};

use crate::container::PointContainer;
use crate::decoder::ShapeDecoder;

/// Average number of encoded bytes per point, used to size output up front.
pub const BYTES_PER_POINT_ESTIMATE: usize = 4;

/// Decodes `encoded` into a container using sample codec `C`.
///
/// # Errors
///
/// Returns [`VarintError::MalformedStream`](varint::VarintError::MalformedStream)
/// if the buffer ends inside a sample. No partial container is returned.
pub fn decode_with<T, C>(encoded: &[u8], precision: f64) -> VarintResult<T>
where
    T: PointContainer,
    C: SampleCodec,
{
    let mut shape = ShapeDecoder::<T::Point, C>::with_precision(encoded, precision);
    let mut points = T::default();
    points.reserve_points(encoded.len() / BYTES_PER_POINT_ESTIMATE);
    while !shape.is_empty() {
        points.push_point(shape.pop()?);
    }
    Ok(points)
}

/// Decodes a 5-bit encoded polyline into a container of points.
///
/// `precision` is the decode factor, e.g. `1e-6` for six digits.
///
/// # Example
///
/// ```
/// use shape::{decode, LonLat};
///
/// let points: Vec<LonLat> = decode(b"_p~iF~ps|U", 1e-5).unwrap();
/// assert!(points[0].approx_eq(&LonLat::new(-120.2, 38.5), 1e-9));
/// ```
pub fn decode<T: PointContainer>(encoded: &[u8], precision: f64) -> VarintResult<T> {
    decode_with::<T, Varint5>(encoded, precision)
}

/// Decodes a 7-bit varint shape into a container of points.
pub fn decode7<T: PointContainer>(encoded: &[u8], precision: f64) -> VarintResult<T> {
    decode_with::<T, Varint7>(encoded, precision)
}

/// Decodes a 5-bit encoded polyline held in a string.
pub fn decode_str<T: PointContainer>(encoded: &str, precision: f64) -> VarintResult<T> {
    decode::<T>(encoded.as_bytes(), precision)
}
