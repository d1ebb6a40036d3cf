//! 7-segment encoding
//!
//! Bit layout of a segment byte (bit 0 = segment A):
//!
//! ```text
//!      A
//!     ---
//!  F |   | B
//!     -G-
//!  E |   | C
//!     ---
//!      D   .DP (bit 7)
//! ```

use super::DigitBuffer;
use crate::config::DisplayConfig;

/// Segment patterns for digits 0-9 (XGFEDCBA)
pub const SEGMENT_TABLE: [u8; 10] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
];

/// Decimal point bit, ORed into a digit's pattern
pub const DECIMAL_POINT: u8 = 0b1000_0000;

/// All segments off
pub const BLANK: u8 = 0x00;

/// Segment pattern for a single digit, `None` above 9
pub fn segment_for(digit: u8) -> Option<u8> {
    SEGMENT_TABLE.get(digit as usize).copied()
}

/// Compose the segment byte for every position, left to right
///
/// Per position, in order:
/// 1. look up the digit pattern;
/// 2. while blanking is active, a zero that is neither the rightmost digit
///    nor the decimal point position is blanked; the first non-zero digit
///    ends blanking for everything to its right;
/// 3. the decimal point position gets bit 7 set;
/// 4. positions past `max_digits` are blanked unconditionally.
///
/// Blanking is active from the start unless `zero_blanking` is set.
pub fn compose_segments<const N: usize>(
    buffer: &DigitBuffer<N>,
    config: &DisplayConfig,
) -> [u8; N] {
    let mut out = [BLANK; N];
    let mut blanking = !config.zero_blanking;
    let rightmost = N.saturating_sub(1);

    for (index, (&digit, byte)) in buffer.digits().iter().zip(out.iter_mut()).enumerate() {
        let has_point = config.decimal_point.map(usize::from) == Some(index);
        let mut segments = SEGMENT_TABLE[digit as usize];

        if digit != 0 {
            blanking = false;
        } else if blanking && index < rightmost && !has_point {
            segments = BLANK;
        }

        if has_point {
            segments |= DECIMAL_POINT;
        }

        if index >= config.max_digits as usize {
            segments = BLANK;
        }

        *byte = segments;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Brightness;

    fn config(zero_blanking: bool, decimal_point: Option<u8>, max_digits: u8) -> DisplayConfig {
        DisplayConfig {
            brightness: Brightness::default(),
            decimal_point,
            zero_blanking,
            max_digits,
        }
    }

    fn compose(digits: [u8; 4], config: &DisplayConfig) -> [u8; 4] {
        compose_segments(&DigitBuffer::from_digits(digits).unwrap(), config)
    }

    #[test]
    fn test_table_values() {
        assert_eq!(
            SEGMENT_TABLE,
            [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F]
        );
        assert_eq!(segment_for(8), Some(0x7F));
        assert_eq!(segment_for(10), None);
    }

    #[test]
    fn test_leading_zeros_blanked() {
        let out = compose([0, 0, 3, 4], &config(false, None, 4));
        assert_eq!(out, [BLANK, BLANK, 0x4F, 0x66]);
    }

    #[test]
    fn test_leading_zeros_shown_when_flag_set() {
        let out = compose([0, 0, 3, 4], &config(true, None, 4));
        assert_eq!(out, [0x3F, 0x3F, 0x4F, 0x66]);
    }

    #[test]
    fn test_inner_zeros_not_blanked() {
        let out = compose([1, 0, 0, 4], &config(false, None, 4));
        assert_eq!(out, [0x06, 0x3F, 0x3F, 0x66]);
    }

    #[test]
    fn test_rightmost_never_blanked() {
        let out = compose([0, 0, 0, 0], &config(false, None, 4));
        assert_eq!(out, [BLANK, BLANK, BLANK, 0x3F]);
    }

    #[test]
    fn test_decimal_point_bit() {
        let out = compose([1, 2, 3, 4], &config(false, Some(1), 4));
        assert_eq!(out[1], 0x5B | DECIMAL_POINT);
        assert_eq!(out[0] & DECIMAL_POINT, 0);
        assert_eq!(out[2] & DECIMAL_POINT, 0);
    }

    #[test]
    fn test_decimal_point_on_blanked_zero() {
        // The decimal point position is shown even inside the blanked run
        let out = compose([0, 0, 3, 4], &config(false, Some(1), 4));
        assert_eq!(out, [BLANK, 0x3F | DECIMAL_POINT, 0x4F, 0x66]);
    }

    #[test]
    fn test_zero_with_decimal_point_leftmost() {
        let out = compose([0, 0, 0, 0], &config(false, Some(0), 4));
        assert_eq!(out, [0x3F | DECIMAL_POINT, BLANK, BLANK, 0x3F]);
    }

    #[test]
    fn test_digit_limit_overrides() {
        let out = compose([1, 2, 3, 4], &config(false, None, 3));
        assert_eq!(out, [0x06, 0x5B, 0x4F, BLANK]);

        // Even the decimal point is dropped past the limit
        let out = compose([1, 2, 3, 4], &config(true, Some(3), 3));
        assert_eq!(out[3], BLANK);

        let out = compose([5, 5, 5, 5], &config(true, None, 1));
        assert_eq!(out, [0x6D, BLANK, BLANK, BLANK]);
    }

    #[test]
    fn test_voltage_reading_layout() {
        // 3.30 V shown as "3.30" with the last digit trimmed
        let out = compose([3, 3, 0, 0], &config(false, Some(0), 3));
        assert_eq!(out, [0x4F | DECIMAL_POINT, 0x4F, 0x3F, BLANK]);
    }
}
