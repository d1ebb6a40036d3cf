//! Analog-to-digital converter abstraction
//!
//! Conversions are split into a start and a poll so the sampling loop never
//! blocks waiting for the converter.

/// Single ADC input channel
pub trait AdcChannel {
    /// Error type for conversion failures
    type Error;

    /// Resolution of the raw result in bits (10 for a PIC, 12 for RP2040)
    const RESOLUTION_BITS: u8;

    /// Begin a conversion on this channel
    fn start_conversion(&mut self) -> Result<(), Self::Error>;

    /// Check for a finished conversion
    ///
    /// Returns `Ok(None)` while the converter is still busy and
    /// `Ok(Some(raw))` exactly once per started conversion.
    fn poll_conversion(&mut self) -> Result<Option<u16>, Self::Error>;
}
