//! Configuration types
//!
//! Board-agnostic game configuration, parsed from the firmware's embedded
//! `game.toml` or taken from defaults.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
