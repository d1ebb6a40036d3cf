//! Status LED output
//!
//! Shows the "sample taken" flash on a GPIO pin, wired either active-high
//! or active-low.

use segmeter_hal::OutputPin;

/// Status LED on a push-pull pin
pub struct StatusLed<P> {
    pin: P,
    /// If true, LED lit = pin LOW
    inverted: bool,
    lit: bool,
}

impl<P: OutputPin> StatusLed<P> {
    /// Create a status LED; it starts dark
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin driving the LED
    /// - `inverted`: If true, the LED is lit when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            lit: false,
        };
        led.set_lit(false);
        led
    }

    /// LED between pin and ground
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// LED between supply and pin
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Light or darken the LED
    pub fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
        self.pin.set_state(lit != self.inverted);
    }

    /// Logical LED state
    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    #[derive(Default)]
    pub(crate) struct MockPin {
        pub high: bool,
        pub writes: usize,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high() {
        let mut led = StatusLed::new_active_high(MockPin::default());

        assert!(!led.is_lit());
        assert!(!led.pin.is_set_high());

        led.set_lit(true);
        assert!(led.is_lit());
        assert!(led.pin.is_set_high());

        led.set_lit(false);
        assert!(!led.pin.is_set_high());
    }

    #[test]
    fn test_active_low() {
        let mut led = StatusLed::new_active_low(MockPin::default());

        // Dark means pin high
        assert!(!led.is_lit());
        assert!(led.pin.is_set_high());

        led.set_lit(true);
        assert!(led.is_lit());
        assert!(!led.pin.is_set_high());
    }

    #[test]
    fn test_starts_dark() {
        let led = StatusLed::new(MockPin { high: true, writes: 0 }, false);
        assert!(!led.pin.is_set_high());
        assert_eq!(led.pin.writes, 1);
    }
}
