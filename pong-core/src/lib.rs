//! Board-agnostic core logic for the Pong firmware
//!
//! This crate contains all game logic that does not depend on
//! specific hardware implementations:
//!
//! - Game configuration types and a `game.toml` parser
//! - Ball, paddle and board simulation (physics, scoring, reactive opponent)
//! - Input events, debouncing and the per-frame event queue
//! - State machine for Menu / Pause / Game
//! - Display abstraction trait and per-state render routines
//! - The `Game` context tying all of the above together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod sim;
pub mod state;
pub mod traits;

pub use game::Game;
