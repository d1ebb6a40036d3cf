//! RP2040-specific HAL for the meter firmware
//!
//! This crate provides RP2040 implementations of the `segmeter-hal`
//! traits on top of `embassy-rp`:
//!
//! - Open-drain emulation on a `Flex` pin (direction switching)
//! - Push-pull status LED output
//! - Blocking ADC channel with the start/poll split

#![no_std]

pub mod adc;
pub mod gpio;

pub use adc::{AdcInput, BlockingAdcChannel};
pub use gpio::{FlexLine, LedOutput};
