//! Meter polling loop body
//!
//! One [`Meter::poll`] call is one iteration of the main loop: consume the
//! tick, advance the sample cycle and LED flash, then move the current
//! sample along (start a conversion, collect a result, update the display).
//!
//! Nothing here blocks except the TM1637 transfer itself.

use embedded_hal::delay::DelayNs;
use segmeter_core::adc::AdcReference;
use segmeter_core::config::{MeterMode, SamplerConfig, DISPLAY_DIGITS};
use segmeter_core::sampler::{LedFlash, SampleCycle, SamplePhase};
use segmeter_hal::{AdcChannel, OpenDrainLine, OutputPin};

use crate::status_led::StatusLed;
use crate::tm1637::{FrameStatus, Tm1637Display};

/// Highest value the counter mode shows before wrapping to 0
pub const COUNTER_MAX: u16 = 9999;

/// Meter errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeterError<E> {
    /// ADC failed to start or finish a conversion; the sample is skipped
    Adc(E),
}

/// A value that reached the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Displayed value (millivolts or count)
    pub value: u16,
    /// Raw ADC code, `None` in counter mode
    pub raw: Option<u16>,
    /// Outcome of the display update
    pub status: FrameStatus,
}

/// Voltmeter / counter main loop state
pub struct Meter<ADC, CLK, DIO, D, LED, const N: usize = DISPLAY_DIGITS> {
    display: Tm1637Display<CLK, DIO, D, N>,
    adc: ADC,
    led: StatusLed<LED>,
    cycle: SampleCycle,
    flash: LedFlash,
    mode: MeterMode,
    reference: AdcReference,
    counter: u16,
}

impl<ADC, CLK, DIO, D, LED, const N: usize> Meter<ADC, CLK, DIO, D, LED, N>
where
    ADC: AdcChannel,
    CLK: OpenDrainLine,
    DIO: OpenDrainLine,
    D: DelayNs,
    LED: OutputPin,
{
    /// Assemble a meter from its parts
    pub fn new(
        display: Tm1637Display<CLK, DIO, D, N>,
        adc: ADC,
        led: StatusLed<LED>,
        config: &SamplerConfig,
    ) -> Self {
        Self {
            display,
            adc,
            led,
            cycle: SampleCycle::new(config.sample_every_ticks),
            flash: LedFlash::new(config.led_on_ticks),
            mode: config.mode,
            reference: config.adc_reference,
            counter: 0,
        }
    }

    /// Show the initial value 0
    pub fn start(&mut self) -> FrameStatus {
        self.led.set_lit(false);
        self.display.show(0)
    }

    /// Run one loop iteration
    ///
    /// `ticked` is the value taken from the tick flag. Returns the sample
    /// that was displayed during this iteration, if any.
    pub fn poll(&mut self, ticked: bool) -> Result<Option<Sample>, MeterError<ADC::Error>> {
        if ticked {
            self.flash.on_tick();
            if self.cycle.on_tick() {
                self.flash.restart();
            }
            self.led.set_lit(self.flash.is_lit());
        }

        match self.cycle.phase() {
            SamplePhase::Idle => Ok(None),
            SamplePhase::ReadRequested => self.begin_sample(),
            SamplePhase::Converting => self.collect_sample(),
        }
    }

    fn begin_sample(&mut self) -> Result<Option<Sample>, MeterError<ADC::Error>> {
        self.cycle.begin_conversion();

        match self.mode {
            MeterMode::Voltmeter => {
                if let Err(e) = self.adc.start_conversion() {
                    self.cycle.finish_conversion();
                    return Err(MeterError::Adc(e));
                }
                Ok(None)
            }
            MeterMode::Counter => {
                self.cycle.finish_conversion();
                self.counter = if self.counter >= COUNTER_MAX {
                    0
                } else {
                    self.counter + 1
                };

                // Counts are whole numbers: no rounding
                self.display.extract_digits(self.counter);
                let status = self.display.render_frame();
                Ok(Some(Sample {
                    value: self.counter,
                    raw: None,
                    status,
                }))
            }
        }
    }

    fn collect_sample(&mut self) -> Result<Option<Sample>, MeterError<ADC::Error>> {
        let raw = match self.adc.poll_conversion() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(e) => {
                self.cycle.finish_conversion();
                return Err(MeterError::Adc(e));
            }
        };
        self.cycle.finish_conversion();

        let value = self.reference.to_millivolts(raw, ADC::RESOLUTION_BITS);
        let status = self.display.show(value);
        Ok(Some(Sample {
            value,
            raw: Some(raw),
            status,
        }))
    }

    /// Current sample phase
    pub fn phase(&self) -> SamplePhase {
        self.cycle.phase()
    }

    /// The display
    pub fn display(&self) -> &Tm1637Display<CLK, DIO, D, N> {
        &self.display
    }

    /// The status LED
    pub fn led(&self) -> &StatusLed<LED> {
        &self.led
    }
}
