//! GPIO pin abstractions
//!
//! Provides traits for the two kinds of digital lines the meter uses:
//! emulated open-drain bus lines and a plain output for the status LED.

/// Open-drain bus line emulated through pin direction
///
/// Driving low configures the pin as an output holding logic 0. Releasing
/// turns it back into an input so the external pull-up floats the line
/// high. The line is never actively driven high.
pub trait OpenDrainLine {
    /// Configure as output and pull the line low
    fn drive_low(&mut self);

    /// Configure as input and let the pull-up take the line high
    fn release(&mut self);

    /// Sample the current line level
    fn is_high(&self) -> bool;

    /// Sample the current line level
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}
