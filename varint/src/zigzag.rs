//! Zig-zag sign folding.
//!
//! Maps signed integers onto unsigned ones so that values of small magnitude,
//! positive or negative, stay small: `0, -1, 1, -2, 2, ...` become
//! `0, 1, 2, 3, 4, ...`.

/// Folds the sign of `value` into the least significant bit.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn zigzag_encode(value: i32) -> u32 {
    if value < 0 {
        !((value as u32) << 1)
    } else {
        (value as u32) << 1
    }
}

/// Reverses [`zigzag_encode`].
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn zigzag_decode(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_interleave() {
        let folded: Vec<u32> = [0, -1, 1, -2, 2].into_iter().map(zigzag_encode).collect();
        assert_eq!(folded, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn extremes() {
        assert_eq!(zigzag_encode(i32::MAX), 0xFFFF_FFFE);
        assert_eq!(zigzag_encode(i32::MIN), 0xFFFF_FFFF);
        assert_eq!(zigzag_decode(0xFFFF_FFFE), i32::MAX);
        assert_eq!(zigzag_decode(0xFFFF_FFFF), i32::MIN);
    }

    #[test]
    fn symmetric_over_representative_range() {
        for value in -1_000_000..=1_000_000 {
            assert_eq!(zigzag_decode(zigzag_encode(value)), value);
        }
    }
}
