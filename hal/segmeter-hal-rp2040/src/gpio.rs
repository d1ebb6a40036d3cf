//! GPIO lines for the display bus and the status LED
//!
//! The TM1637 lines need external pull-ups (most modules carry them). A
//! line is never driven high: the output latch is parked at 0 and only the
//! pin direction changes.

use embassy_rp::gpio::{Flex, Output, Pull};
use segmeter_hal::{OpenDrainLine, OutputPin};

/// Open-drain line emulated on a bidirectional pin
pub struct FlexLine<'d> {
    pin: Flex<'d>,
}

impl<'d> FlexLine<'d> {
    /// Take over a pin and leave the line released
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::None);
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }
}

impl OpenDrainLine for FlexLine<'_> {
    fn drive_low(&mut self) {
        // Latch first so the pin never glitches high
        self.pin.set_low();
        self.pin.set_as_output();
    }

    fn release(&mut self) {
        self.pin.set_as_input();
    }

    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Push-pull output for the status LED
pub struct LedOutput<'d> {
    pin: Output<'d>,
}

impl<'d> LedOutput<'d> {
    /// Wrap an output pin
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for LedOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
