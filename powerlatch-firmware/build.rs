//! Build script for powerlatch-firmware
//!
//! - Adds the cortex-m-rt and defmt linker scripts
//! - Validates board.toml at compile time
//! - Generates the board pin map and the matching embassy pin selection

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use powerlatch_core::config::PinConfig;

/// Keys of the `[power]` table, in `PowerConfig` field order
const POWER_PINS: [&str; 6] = [
    "pwr_on",
    "pwr_switch",
    "audio_shutdown",
    "haptic",
    "intmodule_pwr",
    "extmodule_pwr",
];

fn main() {
    setup_linker();
    let pins = validate_config();
    generate_board_config(&pins);
}

/// Set up linker scripts (memory.x is provided by embassy-stm32)
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml and return the parsed pins in field order
fn validate_config() -> Vec<PinConfig> {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml pin map.                     ║\n\
            ║  Please create one in the powerlatch-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
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
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let pins = validate_power_pins(&config);

    println!("cargo:warning=board.toml validated successfully");
    pins
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

/// Validate the `[power]` pin map
fn validate_power_pins(config: &toml::Value) -> Vec<PinConfig> {
    let mut errors = Vec::new();
    let mut pins = Vec::new();

    let power = match config.get("power") {
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push("[power] must be a table".to_string());
            None
        }
        None => {
            errors.push("Missing [power] section".to_string());
            None
        }
    };

    if let Some(power) = power {
        for key in POWER_PINS {
            match power.get(key) {
                Some(toml::Value::String(s)) => match PinConfig::parse(s) {
                    Ok(pin) => pins.push(pin),
                    Err(e) => errors.push(format!("[power] {} = '{}': {:?}", key, s, e)),
                },
                Some(_) => errors.push(format!("[power] {} must be a pin string like \"PJ1\"", key)),
                None => errors.push(format!("[power] missing '{}'", key)),
            }
        }

        // Two lines on one pin would make the latch fight another driver
        for (i, a) in pins.iter().enumerate() {
            for b in &pins[i + 1..] {
                if a.port == b.port && a.pin == b.pin {
                    errors.push(format!("[power] pin {} assigned twice", a.name()));
                }
            }
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid power pin configuration                          ║\n\
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

    pins
}

/// Write `board_config.rs` into OUT_DIR
fn generate_board_config(pins: &[PinConfig]) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let fields = POWER_PINS
        .iter()
        .zip(pins)
        .map(|(key, pin)| {
            format!(
                "    {}: PinConfig {{ port: '{}', pin: {}, inverted: {} }},",
                key, pin.port, pin.pin, pin.inverted
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    // Runtime pins are picked by name from the same map, so a pin the
    // chip does not have fails to compile instead of diverging.
    let arms = POWER_PINS
        .iter()
        .zip(pins)
        .map(|(key, pin)| format!("    ({}, $p:ident) => {{ $p.{} }};", key, pin.name()))
        .collect::<Vec<_>>()
        .join("\n");

    let code = format!(
        "/// Pin map generated from board.toml\n\
        pub const BOARD_POWER_CONFIG: PowerConfig = PowerConfig {{\n{}\n}};\n\
        \n\
        // Embassy peripheral for each [power] key of board.toml\n\
        macro_rules! power_pin {{\n{}\n}}\n",
        fields, arms
    );

    fs::write(out_dir.join("board_config.rs"), code).unwrap();
}
