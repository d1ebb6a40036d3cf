//! Decimal digit buffer
//!
//! Index 0 is the leftmost (most significant) physical digit. Every entry
//! is always a valid decimal digit.

use crate::config::DISPLAY_DIGITS;

/// Fixed-width buffer of decimal digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitBuffer<const N: usize = DISPLAY_DIGITS> {
    digits: [u8; N],
}

impl<const N: usize> Default for DigitBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DigitBuffer<N> {
    /// All-zero buffer
    pub const fn new() -> Self {
        Self { digits: [0; N] }
    }

    /// Build a buffer from explicit digits, rejecting anything above 9
    pub fn from_digits(digits: [u8; N]) -> Option<Self> {
        if digits.iter().all(|&d| d <= 9) {
            Some(Self { digits })
        } else {
            None
        }
    }

    /// Current digits, left to right
    pub fn digits(&self) -> &[u8; N] {
        &self.digits
    }

    /// Decompose `value` into the buffer
    ///
    /// Digits are peeled off right to left starting at the last position.
    /// Once the leftmost position is filled, higher-order digits are
    /// dropped. Positions not reached stay zero.
    pub fn extract(&mut self, value: u16) {
        self.digits = [0; N];

        let mut remaining = value;
        for slot in self.digits.iter_mut().rev() {
            if remaining == 0 {
                break;
            }
            *slot = (remaining % 10) as u8;
            remaining /= 10;
        }
    }

    /// Round away the rightmost digit
    ///
    /// A rightmost digit above 5 carries one into its left neighbour; a
    /// neighbour that passes 9 wraps to 0 and keeps carrying. The rightmost
    /// digit always ends up zero, and a carry out of the leftmost digit is
    /// lost. Only one decimal place is handled: calling this twice on the
    /// same value rounds twice.
    pub fn round_last(&mut self) {
        let Some((last, rest)) = self.digits.split_last_mut() else {
            return;
        };

        let mut carry = *last > 5;
        *last = 0;

        for digit in rest.iter_mut().rev() {
            if !carry {
                break;
            }
            *digit += 1;
            if *digit > 9 {
                *digit = 0;
            } else {
                carry = false;
            }
        }
    }

    /// Numeric value currently held
    pub fn value(&self) -> u32 {
        self.digits
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + d as u32)
    }
}
