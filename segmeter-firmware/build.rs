//! Build script for segmeter-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates meter.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate meter.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=meter.toml");

    let config_path = Path::new("meter.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: meter.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds meter.toml from the segmeter-firmware       ║\n\
            ║  directory. Please create one there.                             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read meter.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in meter.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_display(&config, &mut errors);
    validate_sampler(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid meter.toml configuration                         ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=meter.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only `[display]` and `[sampler]` tables are allowed at the top level
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        match (name.as_str(), value) {
            ("display" | "sampler", toml::Value::Table(_)) => {}
            ("display" | "sampler", _) => errors.push(format!("[{}] must be a table", name)),
            _ => errors.push(format!("unknown section or key '{}'", name)),
        }
    }
}

/// Check an integer key against an inclusive range
fn check_int(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max))
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
    }
}

fn check_keys(
    table: &toml::value::Table,
    section: &str,
    allowed: &[&str],
    errors: &mut Vec<String>,
) {
    for key in table.keys() {
        if !allowed.contains(&key.as_str()) {
            errors.push(format!("[{}] unknown key '{}'", section, key));
        }
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = config.get("display").and_then(|d| d.as_table()) else {
        return;
    };

    check_keys(
        display,
        "display",
        &["brightness", "decimal_point", "zero_blanking", "max_digits"],
        errors,
    );
    check_int(display, "display", "brightness", 0, 7, errors);
    // Anything past the last digit means "no decimal point"
    check_int(display, "display", "decimal_point", 0, 255, errors);
    check_int(display, "display", "max_digits", 1, 4, errors);

    if let Some(value) = display.get("zero_blanking") {
        if !value.is_bool() {
            errors.push("[display] zero_blanking must be true or false".to_string());
        }
    }
}

fn validate_sampler(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(sampler) = config.get("sampler").and_then(|s| s.as_table()) else {
        return;
    };

    check_keys(
        sampler,
        "sampler",
        &[
            "mode",
            "tick_ms",
            "sample_every_ticks",
            "led_on_ticks",
            "adc_reference",
            "supply_mv",
            "adc_channel",
        ],
        errors,
    );
    check_int(sampler, "sampler", "tick_ms", 1, u32::MAX as i64, errors);
    check_int(sampler, "sampler", "sample_every_ticks", 1, u16::MAX as i64, errors);
    check_int(sampler, "sampler", "led_on_ticks", 0, u16::MAX as i64, errors);
    check_int(sampler, "sampler", "supply_mv", 0, u16::MAX as i64, errors);
    check_int(sampler, "sampler", "adc_channel", 0, 3, errors);

    if let Some(mode) = sampler.get("mode") {
        if !matches!(mode.as_str(), Some("voltmeter" | "counter")) {
            errors.push("[sampler] mode must be 'voltmeter' or 'counter'".to_string());
        }
    }

    if let Some(reference) = sampler.get("adc_reference") {
        if !matches!(
            reference.as_str(),
            Some("fvr1024" | "fvr2048" | "fvr4096" | "supply")
        ) {
            errors.push(
                "[sampler] adc_reference must be fvr1024, fvr2048, fvr4096 or supply".to_string(),
            );
        }
    }
}
