//! Raw ADC code to millivolt conversion
//!
//! Integer-only. The result is `raw * Vref / 2^bits`, so with a reference
//! that is itself a power of two (the 1.024/2.048/4.096 V fixed references)
//! the whole conversion collapses into a shift.

/// ADC reference voltage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcReference {
    /// Fixed 1.024 V reference
    Fvr1024,
    /// Fixed 2.048 V reference
    Fvr2048,
    /// Fixed 4.096 V reference
    Fvr4096,
    /// Supply rail used as reference
    Supply {
        /// Rail voltage in millivolts
        millivolts: u16,
    },
}

impl AdcReference {
    /// Reference voltage in millivolts
    pub const fn millivolts(&self) -> u32 {
        match self {
            AdcReference::Fvr1024 => 1024,
            AdcReference::Fvr2048 => 2048,
            AdcReference::Fvr4096 => 4096,
            AdcReference::Supply { millivolts } => *millivolts as u32,
        }
    }

    /// Convert a raw conversion result to millivolts
    ///
    /// The fractional millivolt is truncated. Results that do not fit a
    /// `u16` saturate.
    pub fn to_millivolts(&self, raw: u16, resolution_bits: u8) -> u16 {
        let mv = (raw as u32 * self.millivolts()) >> resolution_bits;
        mv.min(u16::MAX as u32) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_references_are_shifts() {
        // 10-bit ADC: Vref 1024 mV means 1 mV per code
        for raw in [0u16, 1, 512, 1023] {
            assert_eq!(AdcReference::Fvr1024.to_millivolts(raw, 10), raw);
            assert_eq!(AdcReference::Fvr2048.to_millivolts(raw, 10), raw << 1);
            assert_eq!(AdcReference::Fvr4096.to_millivolts(raw, 10), raw << 2);
        }
    }

    #[test]
    fn test_supply_reference() {
        let reference = AdcReference::Supply { millivolts: 3300 };

        // Full scale on a 12-bit converter is just under Vref
        assert_eq!(reference.to_millivolts(4095, 12), 3299);
        assert_eq!(reference.to_millivolts(2048, 12), 1650);
        assert_eq!(reference.to_millivolts(0, 12), 0);
    }

    #[test]
    fn test_saturation() {
        let reference = AdcReference::Supply { millivolts: u16::MAX };
        assert_eq!(reference.to_millivolts(u16::MAX, 0), u16::MAX);
    }
}
