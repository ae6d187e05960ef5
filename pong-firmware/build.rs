//! Build script for pong-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate game.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: game.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds game.toml as its configuration.             ║\n\
            ║  Please create one in the pong-firmware directory.               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read game.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in game.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_keys(&config, &mut errors);
    validate_values(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid game configuration                               ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&errors.join("\n"))
        );
    }

    println!("cargo:warning=game.toml validated successfully");
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

#[derive(Clone, Copy, PartialEq)]
enum Kind {
    Integer,
    Float,
    Boolean,
}

/// Keys the firmware's parser accepts, per section
const SCHEMA: &[(&str, &[(&str, Kind)])] = &[
    (
        "board",
        &[
            ("min_x", Kind::Integer),
            ("min_y", Kind::Integer),
            ("max_x", Kind::Integer),
            ("max_y", Kind::Integer),
        ],
    ),
    (
        "ball",
        &[
            ("radius", Kind::Integer),
            ("x_speed", Kind::Float),
            ("y_speed", Kind::Float),
        ],
    ),
    (
        "paddle",
        &[
            ("height", Kind::Integer),
            ("width_percent", Kind::Integer),
            ("step_percent", Kind::Integer),
            ("top_inset", Kind::Integer),
            ("bottom_inset", Kind::Integer),
        ],
    ),
    (
        "ai",
        &[("player_one", Kind::Boolean), ("player_two", Kind::Boolean)],
    ),
    (
        "timing",
        &[
            ("tick_ms", Kind::Integer),
            ("frame_ms", Kind::Integer),
            ("debounce_ms", Kind::Integer),
            ("freeze_when_paused", Kind::Boolean),
        ],
    ),
];

/// Reject unknown sections, unknown keys and mistyped values
fn validate_keys(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (section, table) in root {
        let Some((_, keys)) = SCHEMA.iter().find(|(name, _)| *name == section.as_str()) else {
            errors.push(format!("unknown section [{}]", section));
            continue;
        };
        let Some(table) = table.as_table() else {
            errors.push(format!("[{}] must be a table", section));
            continue;
        };

        for (key, value) in table {
            let Some((_, kind)) = keys.iter().find(|(name, _)| *name == key.as_str()) else {
                errors.push(format!("[{}] unknown key '{}'", section, key));
                continue;
            };
            let matches = match kind {
                Kind::Integer => value.is_integer(),
                // The firmware parser reads plain integers as floats too
                Kind::Float => value.is_float() || value.is_integer(),
                Kind::Boolean => value.is_bool(),
            };
            if !matches {
                errors.push(format!("[{}] '{}' has the wrong type", section, key));
            } else if let Some(value) = value.as_integer() {
                if i32::try_from(value).is_err() {
                    errors.push(format!("[{}] '{}' is out of range", section, key));
                }
            }
        }
    }
}

fn integer(config: &toml::Value, section: &str, key: &str) -> Option<i64> {
    config.get(section)?.get(key)?.as_integer()
}

/// Range checks mirroring `GameConfig::validate`
fn validate_values(config: &toml::Value, errors: &mut Vec<String>) {
    let min_x = integer(config, "board", "min_x").unwrap_or(0);
    let min_y = integer(config, "board", "min_y").unwrap_or(20);
    let max_x = integer(config, "board", "max_x").unwrap_or(240);
    let max_y = integer(config, "board", "max_y").unwrap_or(320);
    let (width, height) = (max_x - min_x, max_y - min_y);
    if width <= 0 || height <= 0 {
        errors.push("[board] max_x/max_y must exceed min_x/min_y".to_string());
    }
    if width > i32::MAX as i64 || height > i32::MAX as i64 {
        errors.push("[board] width and height must fit in 32 bits".to_string());
    }

    let radius = integer(config, "ball", "radius").unwrap_or(3);
    if radius <= 0 || radius.saturating_mul(2) >= width || radius.saturating_mul(2) >= height {
        errors.push("[ball] radius must be positive and fit the board".to_string());
    }

    for key in ["x_speed", "y_speed"] {
        let speed = config.get("ball").and_then(|ball| ball.get(key));
        if speed
            .and_then(toml::Value::as_float)
            .is_some_and(|speed| !speed.is_finite())
        {
            errors.push(format!("[ball] {} must be finite", key));
        }
    }

    for key in ["width_percent", "step_percent"] {
        if let Some(percent) = integer(config, "paddle", key) {
            if !(1..=100).contains(&percent) {
                errors.push(format!("[paddle] {} must be 1-100", key));
            }
        }
    }
    if let Some(height) = integer(config, "paddle", "height") {
        if height <= 0 {
            errors.push("[paddle] height must be positive".to_string());
        }
    }

    for key in ["tick_ms", "frame_ms"] {
        if integer(config, "timing", key) == Some(0) {
            errors.push(format!("[timing] {} must be non-zero", key));
        }
    }
    for key in ["tick_ms", "frame_ms", "debounce_ms"] {
        if integer(config, "timing", key).is_some_and(|ms| ms < 0) {
            errors.push(format!("[timing] {} cannot be negative", key));
        }
    }
}
