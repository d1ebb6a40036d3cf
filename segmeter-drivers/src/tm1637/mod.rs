//! TM1637 7-segment display driver (bit-banged)
//!
//! The TM1637 talks a two-wire protocol that looks like I2C without
//! addresses: CLK and DIO are open-drain with external pull-ups, and the
//! master frames every command group between a start and a stop.
//!
//! # Wire protocol
//!
//! - Start: DIO falls while CLK is high
//! - Stop: DIO rises while CLK is high
//! - Data: 8 bits, LSB first, DIO sampled on the CLK rising edge
//! - Ack: the display pulls DIO low during a 9th clock
//! - Every transition is followed by a fixed 100 µs settle time
//!
//! # Display update
//!
//! ```text
//! [start] 0x40                     [stop]   data mode, auto-increment
//! [start] 0xC0 seg0 seg1 seg2 seg3 [stop]   address 0, then digits
//! [start] 0x88 | brightness        [stop]   display on
//! ```
//!
//! Only the single-master, single-device subset is implemented: there is
//! no clock stretching, no timeout and no retry on a missing ack.

pub mod bus;
pub mod display;

#[cfg(test)]
pub(crate) mod sim;

pub use bus::{FrameStatus, Tm1637Bus};
pub use display::Tm1637Display;

/// Data command: write to display registers, auto-increment address
pub const CMD_DATA_MODE: u8 = 0x40;

/// Address command: start at digit register 0
pub const CMD_ADDRESS: u8 = 0xC0;

/// Display control: on, brightness added in bits 0-2
pub const CMD_DISPLAY_ON: u8 = 0x88;

/// Display control: off
pub const CMD_DISPLAY_OFF: u8 = 0x80;

/// Settle time after every line transition
pub const BIT_DELAY_US: u32 = 100;
