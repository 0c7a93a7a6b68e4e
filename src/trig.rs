//! Fixed-point trigonometric lookup tables.
//!
//! Four parallel tables of [`TRIG_LEN`] entries spanning a half period.
//! `SIN21`/`COS21` carry magnitudes in 0..=128, `ASIN21`/`ACOS21` carry
//! angle bytes in 0..=255 where 255 is a half rotation. Indices line up
//! across all four tables, so a single resolved index yields both the angle
//! and its sine/cosine components.

/// Number of entries in each table.
pub const TRIG_LEN: usize = 21;

/// Arc-sine angle bytes.
pub static ASIN21: [u8; TRIG_LEN] = [
    0, 18, 26, 32, 37, 42, 46, 51, 55, 59, 63, 67, 71, 75, 80, 84, 89, 94, 100, 108, 127,
];

/// Arc-cosine angle bytes.
pub static ACOS21: [u8; TRIG_LEN] = [
    255, 218, 202, 190, 179, 170, 160, 152, 143, 135, 127, 119, 111, 102, 94, 85, 75, 64, 52, 36,
    0,
];

/// Sine magnitudes, 0..=128.
pub static SIN21: [u8; TRIG_LEN] = [
    0, 6, 12, 19, 24, 31, 37, 44, 50, 56, 63, 69, 75, 81, 89, 95, 101, 107, 114, 121, 128,
];

/// Cosine magnitudes, 0..=128.
pub static COS21: [u8; TRIG_LEN] = [
    64, 91, 102, 109, 114, 119, 122, 124, 126, 127, 127, 127, 126, 125, 122, 119, 115, 110, 103,
    92, 64,
];

/// Truncating linear rescale of `value` from `[0, in_max)` to `[0, out_max)`.
pub(crate) const fn rescale(value: i32, in_max: i32, out_max: i32) -> i32 {
    value * out_max / in_max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_cos_magnitudes_bounded() {
        assert!(SIN21.iter().all(|&v| v <= 128));
        assert!(COS21.iter().all(|&v| v <= 128));
    }

    #[test]
    fn asin_monotonic_acos_antitonic() {
        assert!(ASIN21.windows(2).all(|w| w[0] < w[1]));
        assert!(ACOS21.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn table_endpoints() {
        assert_eq!(ASIN21[0], 0);
        assert_eq!(ASIN21[TRIG_LEN - 1], 127);
        assert_eq!(ACOS21[0], 255);
        assert_eq!(ACOS21[TRIG_LEN - 1], 0);
        assert_eq!(SIN21[TRIG_LEN - 1], 128);
    }

    #[test]
    fn rescale_truncates_toward_zero() {
        assert_eq!(rescale(9, 10, 21), 18);
        assert_eq!(rescale(41, 42, 21), 20);
        assert_eq!(rescale(0, 42, 21), 0);
        assert_eq!(rescale(128, 128, 36), 36);
    }
}
