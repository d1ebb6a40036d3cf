//! Configuration loading
//!
//! The configuration is `meter.toml`, embedded at build time and checked
//! by build.rs. A runtime parse failure falls back to the defaults.

use defmt::*;
use segmeter_core::config::{parse_config, MeterConfig};

/// Embedded configuration (compiled into firmware)
/// Edit meter.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../meter.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load_config() -> MeterConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded meter.toml");
            config
        }
        Err(e) => {
            error!("meter.toml rejected ({}), using defaults", e);
            MeterConfig::default()
        }
    }
}
