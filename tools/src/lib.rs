//! Command-line tooling for encoded shapes.
//!
//! This crate provides the building blocks behind `shapecodec-tools`:
//!
//! - Parse point lists from JSON and encode them in either format
//! - Decode shapes back into points
//! - Break an encoded buffer down sample by sample
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what the codec is doing.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shape::{LonLat, Precision};
use varint::{SampleCodec, SampleReader, Varint5, Varint7, VarintError, VarintResult};

/// Which sample codec a buffer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeFormat {
    /// Printable 5-bit encoded polyline.
    Varint5,
    /// Binary 7-bit varint shape.
    Varint7,
}

impl ShapeFormat {
    /// Returns the codec name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varint5 => Varint5::NAME,
            Self::Varint7 => Varint7::NAME,
        }
    }

    /// Whether encoded buffers in this format are printable text.
    #[must_use]
    pub const fn is_text(self) -> bool {
        match self {
            Self::Varint5 => Varint5::TEXT_SAFE,
            Self::Varint7 => Varint7::TEXT_SAFE,
        }
    }
}

/// Coordinate axis a sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Lat,
    Lon,
}

/// One decoded sample and where it sits in the buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleEntry {
    pub offset: usize,
    pub len: usize,
    pub axis: Axis,
    pub delta: i32,
    pub value: i32,
    pub coordinate: f64,
}

/// Sample-by-sample breakdown of an encoded buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub format: ShapeFormat,
    pub digits: u8,
    pub byte_len: usize,
    pub point_count: usize,
    pub samples: Vec<SampleEntry>,
    /// Set when the buffer does not end on a point boundary.
    pub error: Option<String>,
}

impl InspectReport {
    /// Average encoded bytes per complete point.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bytes_per_point(&self) -> Option<f64> {
        if self.point_count == 0 {
            return None;
        }
        Some(self.byte_len as f64 / self.point_count as f64)
    }
}

/// Points in JSON, either as `[lon, lat]` pairs or `{"lon", "lat"}` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoint {
    Pair([f64; 2]),
    Object(LonLat),
}

/// Parses a JSON array of points.
pub fn parse_points_json(contents: &str) -> Result<Vec<LonLat>> {
    let points: Vec<JsonPoint> = serde_json::from_str(contents).context("parse points json")?;
    Ok(points
        .into_iter()
        .map(|point| match point {
            JsonPoint::Pair([lon, lat]) => LonLat::new(lon, lat),
            JsonPoint::Object(point) => point,
        })
        .collect())
}

/// Encodes points in `format` at `precision`.
#[must_use]
pub fn encode_points(points: &[LonLat], format: ShapeFormat, precision: Precision) -> Vec<u8> {
    match format {
        ShapeFormat::Varint5 => shape::encode(points, precision.encode_factor()),
        ShapeFormat::Varint7 => shape::encode7(points, precision.encode_factor()),
    }
}

/// Decodes a buffer in `format` at `precision`.
pub fn decode_points(
    bytes: &[u8],
    format: ShapeFormat,
    precision: Precision,
) -> VarintResult<Vec<LonLat>> {
    let bytes = trim_text(bytes, format);
    match format {
        ShapeFormat::Varint5 => shape::decode(bytes, precision.decode_factor()),
        ShapeFormat::Varint7 => shape::decode7(bytes, precision.decode_factor()),
    }
}

/// Breaks `bytes` down into its samples without failing on malformed input.
#[must_use]
pub fn inspect_shape(bytes: &[u8], format: ShapeFormat, precision: Precision) -> InspectReport {
    let bytes = trim_text(bytes, format);
    let (samples, error) = match format {
        ShapeFormat::Varint5 => collect_samples::<Varint5>(bytes, precision),
        ShapeFormat::Varint7 => collect_samples::<Varint7>(bytes, precision),
    };
    let point_count = samples.len() / 2;
    let error = error.or_else(|| {
        (samples.len() % 2 == 1).then(|| {
            VarintError::MalformedStream {
                position: bytes.len(),
                consumed: 0,
            }
            .to_string()
        })
    });
    InspectReport {
        format,
        digits: precision.digits(),
        byte_len: bytes.len(),
        point_count,
        samples,
        error,
    }
}

fn collect_samples<C: SampleCodec>(
    bytes: &[u8],
    precision: Precision,
) -> (Vec<SampleEntry>, Option<String>) {
    let factor = precision.decode_factor();
    let mut reader = SampleReader::new(bytes);
    let mut samples = Vec::new();
    let mut last = [0i32; 2];
    let mut axis = 0usize;
    while !reader.is_empty() {
        let offset = reader.position();
        let value = match reader.read_sample::<C>(last[axis]) {
            Ok(value) => value,
            Err(err) => return (samples, Some(err.to_string())),
        };
        samples.push(SampleEntry {
            offset,
            len: reader.position() - offset,
            axis: if axis == 0 { Axis::Lat } else { Axis::Lon },
            delta: value.wrapping_sub(last[axis]),
            value,
            coordinate: f64::from(value) * factor,
        });
        last[axis] = value;
        axis ^= 1;
    }
    (samples, None)
}

// Text files usually end in a newline, which is never a valid varint5 byte.
fn trim_text(bytes: &[u8], format: ShapeFormat) -> &[u8] {
    if !format.is_text() {
        return bytes;
    }
    let end = bytes
        .iter()
        .rposition(|byte| !byte.is_ascii_whitespace())
        .map_or(0, |idx| idx + 1);
    &bytes[..end]
}

/// Formats points one per line.
#[must_use]
pub fn format_points_pretty(points: &[LonLat], precision: Precision) -> String {
    let digits = usize::from(precision.digits());
    let mut out = String::new();
    for (idx, point) in points.iter().enumerate() {
        let _ = writeln!(
            out,
            "{idx:>6}: lon {:>width$.digits$} lat {:>width$.digits$}",
            point.lon,
            point.lat,
            width = digits + 5,
        );
    }
    out
}

/// Formats bytes as lowercase hex.
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}
