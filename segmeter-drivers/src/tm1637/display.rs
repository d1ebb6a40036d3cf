//! TM1637 display state manager
//!
//! Owns the digit buffer and display configuration and publishes them to
//! the module over a [`Tm1637Bus`].

use embedded_hal::delay::DelayNs;
use segmeter_core::config::{DisplayConfig, DISPLAY_DIGITS};
use segmeter_core::display::{compose_segments, DigitBuffer};
use segmeter_hal::OpenDrainLine;

use super::bus::{FrameStatus, Tm1637Bus};
use super::{CMD_ADDRESS, CMD_DATA_MODE, CMD_DISPLAY_OFF, CMD_DISPLAY_ON};

/// N-digit TM1637 display (4 by default)
pub struct Tm1637Display<CLK, DIO, D, const N: usize = DISPLAY_DIGITS> {
    bus: Tm1637Bus<CLK, DIO, D>,
    digits: DigitBuffer<N>,
    config: DisplayConfig,
}

impl<CLK, DIO, D, const N: usize> Tm1637Display<CLK, DIO, D, N>
where
    CLK: OpenDrainLine,
    DIO: OpenDrainLine,
    D: DelayNs,
{
    /// Create a display with an all-zero buffer; nothing is sent yet
    pub fn new(bus: Tm1637Bus<CLK, DIO, D>, config: DisplayConfig) -> Self {
        Self {
            bus,
            digits: DigitBuffer::new(),
            config,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Replace the configuration; takes effect on the next frame
    pub fn set_config(&mut self, config: DisplayConfig) {
        self.config = config;
    }

    /// Current digit buffer
    pub fn digits(&self) -> &DigitBuffer<N> {
        &self.digits
    }

    /// Decompose `value` into the digit buffer (higher digits dropped)
    pub fn extract_digits(&mut self, value: u16) {
        self.digits.extract(value);
    }

    /// Round away the rightmost digit (one decimal place)
    pub fn round_digits(&mut self) {
        self.digits.round_last();
    }

    /// Segment bytes the next frame would send
    pub fn segments(&self) -> [u8; N] {
        compose_segments(&self.digits, &self.config)
    }

    /// Send the data-mode, digit and display-on command groups
    pub fn render_frame(&mut self) -> FrameStatus {
        let segments = self.segments();
        let on = self.display_on_command();

        let mut status = self.bus.write_command(&[CMD_DATA_MODE]);
        status += self
            .bus
            .write_frame(core::iter::once(CMD_ADDRESS).chain(segments));
        status += self.bus.write_command(&[on]);
        status
    }

    /// Switch the display on (at the configured brightness) or off
    pub fn set_power(&mut self, on: bool) -> FrameStatus {
        let command = if on {
            self.display_on_command()
        } else {
            CMD_DISPLAY_OFF
        };
        self.bus.write_command(&[command])
    }

    /// Extract, round if digits are hidden, and render
    ///
    /// Rounding happens only when `max_digits` hides at least one position,
    /// so the last shown digit reflects the dropped one.
    pub fn show(&mut self, value: u16) -> FrameStatus {
        self.extract_digits(value);
        if (self.config.max_digits as usize) < N {
            self.round_digits();
        }
        self.render_frame()
    }

    fn display_on_command(&self) -> u8 {
        // Not clamped: the brightness type guards the range
        CMD_DISPLAY_ON.wrapping_add(self.config.brightness.level())
    }
}
