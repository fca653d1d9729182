//! Decimal precision shared out of band by encoder and decoder.

/// Number of decimal digits stored by default.
pub const DIGITS_PRECISION: u8 = 6;

/// Default factor applied to coordinates before rounding to samples.
pub const ENCODE_PRECISION: i32 = 1_000_000;

/// Default factor applied to decoded samples; the reciprocal of [`ENCODE_PRECISION`].
pub const DECODE_PRECISION: f64 = 1e-6;

/// A power-of-ten precision expressed as a digit count.
///
/// The encoded buffer does not carry its precision, so both ends must agree
/// on one. Changing the digit count is a breaking change for stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    digits: u8,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            digits: DIGITS_PRECISION,
        }
    }
}

impl Precision {
    /// Largest digit count whose factor still fits in an `i32`.
    pub const MAX_DIGITS: u8 = 9;

    /// Creates a precision of `digits` decimal places.
    ///
    /// Returns `None` if `digits` exceeds [`MAX_DIGITS`](Self::MAX_DIGITS).
    #[must_use]
    pub const fn new(digits: u8) -> Option<Self> {
        if digits > Self::MAX_DIGITS {
            return None;
        }
        Some(Self { digits })
    }

    /// Five digits, as used by the Google encoded polyline algorithm.
    #[must_use]
    pub const fn polyline5() -> Self {
        Self { digits: 5 }
    }

    /// Seven digits, for higher-precision shapes.
    #[must_use]
    pub const fn high() -> Self {
        Self { digits: 7 }
    }

    /// Returns the number of decimal digits.
    #[must_use]
    pub const fn digits(self) -> u8 {
        self.digits
    }

    /// Returns the factor passed to the encoders (`10^digits`).
    #[must_use]
    pub const fn encode_factor(self) -> i32 {
        10i32.pow(self.digits as u32)
    }

    /// Returns the factor passed to the decoders (`10^-digits`).
    #[must_use]
    pub fn decode_factor(self) -> f64 {
        1.0 / f64::from(self.encode_factor())
    }
}
