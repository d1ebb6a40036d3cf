//! Segmeter Hardware Abstraction Layer
//!
//! This crate defines the pin and converter capabilities the display driver
//! and sampling loop need. Chip-specific crates implement them; host tests
//! implement them with simulated lines.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  segmeter-drivers (TM1637, meter loop)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segmeter-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ segmeter-hal- │       │  test mocks   │
//! │    rp2040     │       │   (host)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OpenDrainLine`] - Bus line driven low or released to a pull-up
//! - [`gpio::OutputPin`] - Push-pull digital output
//! - [`adc::AdcChannel`] - Start/poll analog conversion

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::AdcChannel;
pub use gpio::{OpenDrainLine, OutputPin};
