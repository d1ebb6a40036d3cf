//! Hardware driver implementations
//!
//! This crate provides the drivers that sit on top of the traits in
//! `segmeter-hal`:
//!
//! - TM1637 bit-banged bus engine and display state manager
//! - Status LED (active-high or active-low)
//! - Meter: one iteration of the sampling/display polling loop

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod meter;
pub mod status_led;
pub mod tm1637;
