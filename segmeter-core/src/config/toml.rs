//! Simple TOML parser for the meter configuration
//!
//! This is a minimal, allocation-free parser that handles only the subset
//! used by `meter.toml`. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - `[display]` and `[sampler]` section headers
//! - Key = value pairs (string, integer, boolean)
//! - Comments (# ...), including trailing comments
//!
//! NOT supported:
//! - Multi-line strings, arrays, inline tables
//! - Dotted keys

use heapless::String as HString;

use super::types::{Brightness, ConfigError, DisplayConfig, MeterConfig, MeterMode, SamplerConfig};
use super::DISPLAY_DIGITS;
use crate::adc::AdcReference;

/// Longest string value accepted
const MAX_VALUE_LEN: usize = 16;

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Sampler,
}

/// Reference selection before the supply voltage is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReferenceKind {
    Fvr1024,
    Fvr2048,
    Fvr4096,
    Supply,
}

/// Parse TOML configuration into a validated [`MeterConfig`]
///
/// Keys that are not present keep their defaults.
pub fn parse_config(input: &str) -> Result<MeterConfig, ConfigError> {
    let mut config = MeterConfig::default();
    let mut section = Section::Root;

    // adc_reference and supply_mv may appear in either order
    let mut reference: Option<ReferenceKind> = None;
    let mut supply_mv: Option<u16> = None;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ConfigError::InvalidValue)?;
        let key = key.trim();
        let value = value.trim();

        match section {
            Section::Root => return Err(ConfigError::UnknownKey),
            Section::Display => apply_display_key(&mut config.display, key, value)?,
            Section::Sampler => match key {
                "adc_reference" => reference = Some(parse_reference(value)?),
                "supply_mv" => supply_mv = Some(parse_int(value)?),
                _ => apply_sampler_key(&mut config.sampler, key, value)?,
            },
        }
    }

    match reference {
        Some(ReferenceKind::Fvr1024) => config.sampler.adc_reference = AdcReference::Fvr1024,
        Some(ReferenceKind::Fvr2048) => config.sampler.adc_reference = AdcReference::Fvr2048,
        Some(ReferenceKind::Fvr4096) => config.sampler.adc_reference = AdcReference::Fvr4096,
        Some(ReferenceKind::Supply) | None => {
            if let Some(millivolts) = supply_mv {
                config.sampler.adc_reference = AdcReference::Supply { millivolts };
            }
        }
    }

    config.validate()?;
    Ok(config)
}

/// Parse a section header name
fn parse_section_header(name: &str) -> Result<Section, ConfigError> {
    match name.trim() {
        "display" => Ok(Section::Display),
        "sampler" => Ok(Section::Sampler),
        _ => Err(ConfigError::InvalidSection),
    }
}

fn apply_display_key(
    display: &mut DisplayConfig,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    match key {
        "brightness" => display.brightness = Brightness::new(parse_int(value)?)?,
        "decimal_point" => {
            display.decimal_point =
                DisplayConfig::decimal_point_from_raw(parse_int(value)?, DISPLAY_DIGITS)
        }
        "zero_blanking" => display.zero_blanking = parse_bool(value)?,
        "max_digits" => display.max_digits = parse_int(value)?,
        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}

fn apply_sampler_key(
    sampler: &mut SamplerConfig,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    match key {
        "mode" => {
            sampler.mode = match parse_string(value)?.as_str() {
                "voltmeter" => MeterMode::Voltmeter,
                "counter" => MeterMode::Counter,
                _ => return Err(ConfigError::InvalidValue),
            }
        }
        "tick_ms" => sampler.tick_ms = parse_int(value)?,
        "sample_every_ticks" => sampler.sample_every_ticks = parse_int(value)?,
        "led_on_ticks" => sampler.led_on_ticks = parse_int(value)?,
        "adc_channel" => sampler.adc_channel = parse_int(value)?,
        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}

fn parse_reference(value: &str) -> Result<ReferenceKind, ConfigError> {
    match parse_string(value)?.as_str() {
        "fvr1024" => Ok(ReferenceKind::Fvr1024),
        "fvr2048" => Ok(ReferenceKind::Fvr2048),
        "fvr4096" => Ok(ReferenceKind::Fvr4096),
        "supply" => Ok(ReferenceKind::Supply),
        _ => Err(ConfigError::InvalidValue),
    }
}

/// Drop a trailing `# comment` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (idx, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..idx],
            _ => {}
        }
    }
    line
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_string(value: &str) -> Result<HString<MAX_VALUE_LEN>, ConfigError> {
    let inner = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ConfigError::InvalidValue)?;

    let mut s = HString::new();
    s.push_str(inner).map_err(|_| ConfigError::InvalidValue)?;
    Ok(s)
}
