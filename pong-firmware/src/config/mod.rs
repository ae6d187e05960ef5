//! Configuration loading
//!
//! The configuration is `game.toml`, embedded at compile time and parsed
//! with the core crate's `no_std` parser.

use defmt::*;

use pong_core::config::{
    parse_config, AiConfig, BallConfig, BoardBounds, GameConfig, PaddleConfig, TimingConfig,
};

/// Embedded configuration (compiled into firmware)
/// Edit game.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../game.toml");

/// Parse the embedded configuration
///
/// Falls back to a built-in 128x64 layout if parsing fails, which can only
/// happen when build-time validation and the parser disagree.
pub fn load_config() -> GameConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using fallback configuration");
            fallback_config()
        }
    }
}

/// OLED layout used when `game.toml` is unusable
fn fallback_config() -> GameConfig {
    GameConfig {
        bounds: BoardBounds::new(0, 10, 128, 64),
        ball: BallConfig {
            radius: 2,
            ..BallConfig::default()
        },
        paddle: PaddleConfig {
            height: 3,
            top_inset: 3,
            bottom_inset: 6,
            ..PaddleConfig::default()
        },
        ai: AiConfig {
            player_one: false,
            player_two: true,
        },
        timing: TimingConfig {
            freeze_when_paused: true,
            ..TimingConfig::default()
        },
    }
}
