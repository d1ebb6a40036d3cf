//! ADC channel access
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor (not used)

use embassy_rp::adc::{Adc, Blocking, Channel, Error};
use segmeter_hal::AdcChannel;

/// External ADC input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcInput {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
}

impl AdcInput {
    /// Input for a configured channel index
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(AdcInput::Adc0),
            1 => Some(AdcInput::Adc1),
            2 => Some(AdcInput::Adc2),
            3 => Some(AdcInput::Adc3),
            _ => None,
        }
    }

    /// GPIO pin for this input
    pub fn gpio(&self) -> u8 {
        match self {
            AdcInput::Adc0 => 26,
            AdcInput::Adc1 => 27,
            AdcInput::Adc2 => 28,
            AdcInput::Adc3 => 29,
        }
    }
}

/// One ADC input read in blocking mode
///
/// A conversion takes 2 µs, so it runs to completion inside
/// `start_conversion` and the result is handed out by the next poll.
pub struct BlockingAdcChannel<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
    result: Option<u16>,
}

impl<'d> BlockingAdcChannel<'d> {
    /// Bind the converter to one input channel
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self {
            adc,
            channel,
            result: None,
        }
    }
}

impl AdcChannel for BlockingAdcChannel<'_> {
    type Error = Error;

    const RESOLUTION_BITS: u8 = 12;

    fn start_conversion(&mut self) -> Result<(), Self::Error> {
        let raw = self.adc.blocking_read(&mut self.channel)?;
        self.result = Some(raw);
        Ok(())
    }

    fn poll_conversion(&mut self) -> Result<Option<u16>, Self::Error> {
        Ok(self.result.take())
    }
}
