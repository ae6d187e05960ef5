//! Simple TOML parser for game configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `game.toml`. It does NOT support full TOML.
//!
//! Supported features:
//! - `key = value` pairs (integer, float, boolean)
//! - `[section]` headers
//! - Comments (`# ...`), full-line or trailing
//!
//! Keys that are not present keep their default value. Unknown sections
//! and keys are rejected so typos do not silently fall back to defaults.

use core::str::FromStr;

use super::types::{ConfigError, GameConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Malformed or unknown section header
    InvalidSection,
    /// Line is neither a header nor a `key = value` pair
    InvalidLine,
    /// Key not known in the current section
    UnknownKey,
    /// Value could not be parsed as the expected type
    InvalidValue,
    /// Parsed configuration failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(err: ConfigError) -> Self {
        ParseError::Invalid(err)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Board,
    Ball,
    Paddle,
    Ai,
    Timing,
}

/// Parse `game.toml` content into a validated `GameConfig`
pub fn parse_config(input: &str) -> Result<GameConfig, ParseError> {
    let mut config = GameConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(line[1..line.len() - 1].trim())?;
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::InvalidLine)?;
        apply_key(&mut config, section, key.trim(), value.trim())?;
    }

    config.validate()?;
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn parse_section_header(name: &str) -> Result<Section, ParseError> {
    match name {
        "board" => Ok(Section::Board),
        "ball" => Ok(Section::Ball),
        "paddle" => Ok(Section::Paddle),
        "ai" => Ok(Section::Ai),
        "timing" => Ok(Section::Timing),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_key(
    config: &mut GameConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Board, "min_x") => config.bounds.min_x = parse_value(value)?,
        (Section::Board, "min_y") => config.bounds.min_y = parse_value(value)?,
        (Section::Board, "max_x") => config.bounds.max_x = parse_value(value)?,
        (Section::Board, "max_y") => config.bounds.max_y = parse_value(value)?,

        (Section::Ball, "radius") => config.ball.radius = parse_value(value)?,
        (Section::Ball, "x_speed") => config.ball.x_speed = parse_value(value)?,
        (Section::Ball, "y_speed") => config.ball.y_speed = parse_value(value)?,

        (Section::Paddle, "height") => config.paddle.height = parse_value(value)?,
        (Section::Paddle, "width_percent") => config.paddle.width_percent = parse_value(value)?,
        (Section::Paddle, "step_percent") => config.paddle.step_percent = parse_value(value)?,
        (Section::Paddle, "top_inset") => config.paddle.top_inset = parse_value(value)?,
        (Section::Paddle, "bottom_inset") => config.paddle.bottom_inset = parse_value(value)?,

        (Section::Ai, "player_one") => config.ai.player_one = parse_value(value)?,
        (Section::Ai, "player_two") => config.ai.player_two = parse_value(value)?,

        (Section::Timing, "tick_ms") => config.timing.tick_ms = parse_value(value)?,
        (Section::Timing, "frame_ms") => config.timing.frame_ms = parse_value(value)?,
        (Section::Timing, "debounce_ms") => config.timing.debounce_ms = parse_value(value)?,
        (Section::Timing, "freeze_when_paused") => {
            config.timing.freeze_when_paused = parse_value(value)?
        }

        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn parse_value<T: FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}
