//! Board-agnostic core logic for the TM1637 voltmeter
//!
//! This crate contains all logic that does not touch pins or converters:
//!
//! - Digit buffer (extraction, single-place rounding)
//! - Segment table and per-digit segment composition
//! - Millivolt conversion against a reference voltage
//! - Tick flag, sampling cycle and LED flash timing
//! - Configuration types and the `meter.toml` parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adc;
pub mod config;
pub mod display;
pub mod sampler;
