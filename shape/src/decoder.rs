//! Lazy point-sequence decoding.

use std::marker::PhantomData;

use varint::{SampleCodec, SampleReader, Varint5, Varint7, VarintResult};

use crate::point::FromLonLat;
use crate::precision::DECODE_PRECISION;

/// Decodes points one at a time from an encoded buffer.
///
/// Keeps one running sample per axis, both starting at zero. Each point is
/// stored as a latitude delta followed by a longitude delta.
///
/// The decoder only moves forward. It borrows the buffer and owns nothing
/// else, so independent decoders over independent buffers can run in
/// parallel.
#[derive(Debug)]
pub struct ShapeDecoder<'a, P, C = Varint5> {
    reader: SampleReader<'a>,
    lat: i32,
    lon: i32,
    precision: f64,
    failed: bool,
    _marker: PhantomData<fn() -> (P, C)>,
}

/// Decoder for the printable 5-bit polyline format.
pub type Shape5Decoder<'a, P> = ShapeDecoder<'a, P, Varint5>;

/// Decoder for the 7-bit binary format.
pub type Shape7Decoder<'a, P> = ShapeDecoder<'a, P, Varint7>;

impl<'a, P, C> ShapeDecoder<'a, P, C>
where
    P: FromLonLat,
    C: SampleCodec,
{
    /// Creates a decoder using [`DECODE_PRECISION`].
    #[must_use]
    pub const fn new(encoded: &'a [u8]) -> Self {
        Self::with_precision(encoded, DECODE_PRECISION)
    }

    /// Creates a decoder that multiplies samples by `precision`.
    #[must_use]
    pub const fn with_precision(encoded: &'a [u8], precision: f64) -> Self {
        Self {
            reader: SampleReader::new(encoded),
            lat: 0,
            lon: 0,
            precision,
            failed: false,
            _marker: PhantomData,
        }
    }

    /// Decodes the next point.
    ///
    /// The running totals are only updated once both axes decode, so a
    /// failure never yields half a point.
    ///
    /// # Errors
    ///
    /// Returns [`VarintError::MalformedStream`](varint::VarintError::MalformedStream)
    /// if the buffer ends inside a sample, including when the decoder is
    /// already empty.
    pub fn pop(&mut self) -> VarintResult<P> {
        let lat = self.reader.read_sample::<C>(self.lat)?;
        let lon = self.reader.read_sample::<C>(self.lon)?;
        self.lat = lat;
        self.lon = lon;
        Ok(P::from_lon_lat(
            f64::from(lon) * self.precision,
            f64::from(lat) * self.precision,
        ))
    }

    /// Returns `true` once every byte has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reader.is_empty()
    }

    /// Returns the number of bytes not yet decoded.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    /// Returns the current byte offset into the buffer.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.reader.position()
    }

    /// Returns the precision samples are scaled by.
    #[must_use]
    pub const fn precision(&self) -> f64 {
        self.precision
    }
}

impl<P, C> Iterator for ShapeDecoder<'_, P, C>
where
    P: FromLonLat,
    C: SampleCodec,
{
    type Item = VarintResult<P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_empty() {
            return None;
        }
        let point = self.pop();
        self.failed = point.is_err();
        Some(point)
    }
}

impl<P, C> std::iter::FusedIterator for ShapeDecoder<'_, P, C>
where
    P: FromLonLat,
    C: SampleCodec,
{
}
