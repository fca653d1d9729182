//! Encoding point sequences.
//!
//! Coordinates are scaled by the precision factor and rounded half away from
//! zero. Scaled values must fit in an `i32`; valid geographic coordinates at
//! up to seven digits always do. Values outside that range saturate and the
//! output no longer round-trips.

use varint::{SampleCodec, SampleWriter, Varint5, Varint7};

use crate::point::Coordinate;

/// Bytes reserved per point; two samples rarely exceed four bytes each.
const RESERVE_BYTES_PER_POINT: usize = 8;

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn scale(value: f64, factor: f64) -> i32 {
    (value * factor).round() as i32
}

/// Encodes points with sample codec `C`.
pub fn encode_with<C, I>(points: I, precision: i32) -> Vec<u8>
where
    C: SampleCodec,
    I: IntoIterator,
    I::Item: Coordinate,
{
    let points = points.into_iter();
    let (lower, _) = points.size_hint();
    let mut writer = SampleWriter::with_capacity(lower.saturating_mul(RESERVE_BYTES_PER_POINT));
    let factor = f64::from(precision);

    let mut last_lon = 0i32;
    let mut last_lat = 0i32;
    for point in points {
        let lon = scale(point.lon(), factor);
        let lat = scale(point.lat(), factor);
        writer.write_sample::<C>(lat.wrapping_sub(last_lat));
        writer.write_sample::<C>(lon.wrapping_sub(last_lon));
        last_lon = lon;
        last_lat = lat;
    }
    writer.finish()
}

/// Encodes points in the printable 5-bit polyline format.
///
/// `precision` is the encode factor, e.g. `1_000_000` for six digits.
///
/// # Example
///
/// ```
/// use shape::encode;
///
/// let encoded = encode(&[(-120.2, 38.5)], 100_000);
/// assert_eq!(encoded, b"_p~iF~ps|U");
/// ```
pub fn encode<I>(points: I, precision: i32) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: Coordinate,
{
    encode_with::<Varint5, I>(points, precision)
}

/// Encodes points in the 7-bit binary format.
pub fn encode7<I>(points: I, precision: i32) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: Coordinate,
{
    encode_with::<Varint7, I>(points, precision)
}

/// Encodes points in the 5-bit format and returns the result as text.
pub fn encode_string<I>(points: I, precision: i32) -> String
where
    I: IntoIterator,
    I::Item: Coordinate,
{
    // Varint5 output is always ASCII.
    encode(points, precision).into_iter().map(char::from).collect()
}
