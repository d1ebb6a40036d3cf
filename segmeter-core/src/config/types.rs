//! Configuration type definitions

use crate::adc::AdcReference;

/// Number of physical digits on a TM1637 4-digit module
pub const DISPLAY_DIGITS: usize = 4;

/// Highest brightness level accepted by the display control command
pub const MAX_BRIGHTNESS: u8 = 7;

/// Highest ADC input index that can be selected (ADC0..ADC3)
pub const MAX_ADC_CHANNEL: u8 = 3;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Brightness above 7 would spill into the display-on bit
    BrightnessOutOfRange,
    /// Displayed digit count outside 1..=digits
    DigitLimitOutOfRange,
    /// ADC channel index not available
    ChannelOutOfRange,
    /// Value has the wrong type or cannot be parsed
    InvalidValue,
    /// Unknown or malformed `[section]` header
    InvalidSection,
    /// Key not recognised in the current section
    UnknownKey,
}

/// Display brightness level (0-7)
///
/// The level is added to the display-on command byte, so anything above 7
/// corrupts neighbouring command bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Dimmest setting
    pub const MIN: Self = Self(0);

    /// Brightest setting
    pub const MAX: Self = Self(MAX_BRIGHTNESS);

    /// Create a brightness level, rejecting values above 7
    pub const fn new(level: u8) -> Result<Self, ConfigError> {
        if level > MAX_BRIGHTNESS {
            Err(ConfigError::BrightnessOutOfRange)
        } else {
            Ok(Self(level))
        }
    }

    /// Create a brightness level without a range check
    ///
    /// Levels above 7 are sent to the display as-is.
    pub const fn new_unchecked(level: u8) -> Self {
        Self(level)
    }

    /// Raw level
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(5)
    }
}

/// Display rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Brightness level added to the display-on command
    pub brightness: Brightness,
    /// Digit (counted from the left) whose decimal point is lit
    pub decimal_point: Option<u8>,
    /// When set, leading zeros are shown as real digits (use this with a
    /// decimal point, so 50 mV reads "0.05").
    /// When clear, leading zeros are blanked up to the first non-zero
    /// digit, including zeros right of the decimal point.
    pub zero_blanking: bool,
    /// Number of digits shown from the left; the rest are blanked
    pub max_digits: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness: Brightness::default(),
            decimal_point: None,
            zero_blanking: false,
            max_digits: DISPLAY_DIGITS as u8,
        }
    }
}

impl DisplayConfig {
    /// Map a raw decimal point index to an optional position
    ///
    /// Any index past the last digit means "no decimal point".
    pub fn decimal_point_from_raw(raw: u8, digits: usize) -> Option<u8> {
        if (raw as usize) < digits {
            Some(raw)
        } else {
            None
        }
    }

    /// Check ranges against a display with `digits` positions
    pub fn validate(&self, digits: usize) -> Result<(), ConfigError> {
        if self.brightness.level() > MAX_BRIGHTNESS {
            return Err(ConfigError::BrightnessOutOfRange);
        }
        if self.max_digits == 0 || self.max_digits as usize > digits {
            return Err(ConfigError::DigitLimitOutOfRange);
        }
        Ok(())
    }
}

/// What the meter shows each sample period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeterMode {
    /// ADC input in millivolts
    #[default]
    Voltmeter,
    /// Incrementing count 0..=9999, no ADC involved
    Counter,
}

/// Sampling loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerConfig {
    /// Value source
    pub mode: MeterMode,
    /// Tick period in milliseconds
    pub tick_ms: u32,
    /// Ticks between samples (20 x 50ms = 1s)
    pub sample_every_ticks: u16,
    /// Ticks the status LED stays lit after a sample starts (0 = never)
    pub led_on_ticks: u16,
    /// ADC reference voltage
    pub adc_reference: AdcReference,
    /// ADC input index
    pub adc_channel: u8,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            mode: MeterMode::Voltmeter,
            tick_ms: 50,
            sample_every_ticks: 20,
            led_on_ticks: 1,
            adc_reference: AdcReference::Supply { millivolts: 3300 },
            adc_channel: 0,
        }
    }
}

impl SamplerConfig {
    /// Check timing and channel ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 || self.sample_every_ticks == 0 {
            return Err(ConfigError::InvalidValue);
        }
        if self.adc_channel > MAX_ADC_CHANNEL {
            return Err(ConfigError::ChannelOutOfRange);
        }
        Ok(())
    }

    /// Sample period in milliseconds, saturating at `u32::MAX`
    pub fn sample_period_ms(&self) -> u32 {
        self.tick_ms.saturating_mul(self.sample_every_ticks as u32)
    }
}

/// Complete meter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeterConfig {
    /// Display rendering
    pub display: DisplayConfig,
    /// Sampling loop
    pub sampler: SamplerConfig,
}

impl MeterConfig {
    /// Validate all sections for a 4-digit module
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate(DISPLAY_DIGITS)?;
        self.sampler.validate()
    }
}
