//! Delta-encoded coordinate sequences.
//!
//! Converts ordered `(longitude, latitude)` point sequences into compact byte
//! strings and back. Each axis is stored as a fixed-point delta against the
//! previous point, serialized with one of the [`varint`] sample codecs.
//!
//! # Features
//!
//! - 5-bit printable encoded polylines ([`encode`], [`decode`])
//! - 7-bit binary shapes ([`encode7`], [`decode7`])
//! - Lazy decoding with [`Shape5Decoder`] / [`Shape7Decoder`]
//! - Single-axis sample streams ([`encode7_samples`], [`decode7_samples`])
//! - Generic over point type ([`Coordinate`], [`FromLonLat`]) and output
//!   container ([`PointContainer`])
//!
//! # Wire format
//!
//! Latitude is written before longitude for every point. The buffer has no
//! length prefix, no terminator and no embedded precision: both sides must
//! agree on a [`Precision`] out of band.
//!
//! # Example
//!
//! ```
//! use shape::{decode, encode, LonLat, Precision};
//!
//! let precision = Precision::polyline5();
//! let route = vec![LonLat::new(-120.2, 38.5), LonLat::new(-120.95, 40.7)];
//!
//! let encoded = encode(&route, precision.encode_factor());
//! assert_eq!(encoded, b"_p~iF~ps|U_ulLnnqC");
//!
//! let decoded: Vec<LonLat> = decode(&encoded, precision.decode_factor()).unwrap();
//! for (got, want) in decoded.iter().zip(&route) {
//!     assert!(got.approx_eq(want, 1e-5));
//! }
//! ```

mod container;
mod decode;
mod decoder;
mod encode;
mod point;
mod precision;
mod samples;

pub use container::PointContainer;
pub use decode::{decode, decode7, decode_str, decode_with, BYTES_PER_POINT_ESTIMATE};
pub use decoder::{Shape5Decoder, Shape7Decoder, ShapeDecoder};
pub use encode::{encode, encode7, encode_string, encode_with};
pub use point::{Coordinate, FromLonLat, LonLat};
pub use precision::{Precision, DECODE_PRECISION, DIGITS_PRECISION, ENCODE_PRECISION};
pub use samples::{decode7_samples, decode_samples, encode7_samples, encode_samples};
pub use varint::{SampleCodec, Varint5, Varint7, VarintError, VarintResult};
