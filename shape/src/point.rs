//! Point abstractions the codec is generic over.
//!
//! Encoding only needs to read a longitude and a latitude ([`Coordinate`]);
//! decoding only needs to build a point from them ([`FromLonLat`]). Tuples
//! and arrays are read as `(longitude, latitude)`.

/// A point whose longitude and latitude can be read.
pub trait Coordinate {
    /// Longitude in decimal degrees (or any x-like unit).
    fn lon(&self) -> f64;

    /// Latitude in decimal degrees (or any y-like unit).
    fn lat(&self) -> f64;
}

/// A point that can be built from a longitude and a latitude.
pub trait FromLonLat {
    /// Builds a point from `lon` and `lat`.
    fn from_lon_lat(lon: f64, lat: f64) -> Self;
}

impl<T: Coordinate + ?Sized> Coordinate for &T {
    fn lon(&self) -> f64 {
        (**self).lon()
    }

    fn lat(&self) -> f64 {
        (**self).lat()
    }
}

/// A plain longitude/latitude pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    /// Creates a point from `lon` and `lat`.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns `true` if both axes are within `tolerance` of `other`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.lon - other.lon).abs() <= tolerance && (self.lat - other.lat).abs() <= tolerance
    }
}

impl Coordinate for LonLat {
    fn lon(&self) -> f64 {
        self.lon
    }

    fn lat(&self) -> f64 {
        self.lat
    }
}

impl FromLonLat for LonLat {
    fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<(f64, f64)> for LonLat {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl Coordinate for (f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }

    fn lat(&self) -> f64 {
        self.1
    }
}

impl FromLonLat for (f64, f64) {
    fn from_lon_lat(lon: f64, lat: f64) -> Self {
        (lon, lat)
    }
}

impl Coordinate for [f64; 2] {
    fn lon(&self) -> f64 {
        self[0]
    }

    fn lat(&self) -> f64 {
        self[1]
    }
}

impl FromLonLat for [f64; 2] {
    fn from_lon_lat(lon: f64, lat: f64) -> Self {
        [lon, lat]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_is_lon_lat() {
        let point: (f64, f64) = (-122.5, 38.5);
        assert_eq!(point.lon(), -122.5);
        assert_eq!(point.lat(), 38.5);
        assert_eq!(<(f64, f64)>::from_lon_lat(1.0, 2.0), (1.0, 2.0));
    }

    #[test]
    fn array_is_lon_lat() {
        let point: [f64; 2] = [4.0, 5.0];
        assert_eq!(point.lon(), 4.0);
        assert_eq!(point.lat(), 5.0);
        assert_eq!(<[f64; 2]>::from_lon_lat(1.0, 2.0), [1.0, 2.0]);
    }

    #[test]
    fn lonlat_accessors() {
        let point = LonLat::new(13.4, 52.5);
        assert_eq!(point.lon(), 13.4);
        assert_eq!(point.lat(), 52.5);
        assert_eq!(LonLat::from((13.4, 52.5)), point);
        assert_eq!(LonLat::from_lon_lat(13.4, 52.5), point);
    }

    #[test]
    fn reference_reads_through() {
        let point = LonLat::new(1.5, -2.5);
        let by_ref = &point;
        assert_eq!(Coordinate::lon(&by_ref), 1.5);
        assert_eq!(Coordinate::lat(&by_ref), -2.5);
    }

    #[test]
    fn approx_eq_tolerance() {
        let a = LonLat::new(1.0, 1.0);
        let b = LonLat::new(1.000_001, 0.999_999);
        assert!(a.approx_eq(&b, 1e-5));
        assert!(!a.approx_eq(&b, 1e-7));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn lonlat_serde_roundtrip() {
        let point = LonLat::new(13.4, 52.5);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"lon":13.4,"lat":52.5}"#);
        let back: LonLat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }
}
