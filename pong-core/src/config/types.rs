//! Configuration type definitions
//!
//! These types describe the playing field and the tunables of the game.
//! Defaults reproduce the 240x320 LCD layout with a 20 pixel scoreboard band.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of balls on the board at once
pub const MAX_BALLS: usize = 6;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Board has zero or negative width/height
    EmptyBoard,
    /// Ball does not fit between the walls
    BallTooLarge,
    /// A percentage is outside 1..=100
    InvalidPercent,
    /// Paddle width or height rounds down to zero
    PaddleTooThin,
    /// Tick or frame interval is zero
    ZeroInterval,
    /// Ball speed is infinite or NaN
    InvalidSpeed,
    /// Coordinates or sizes overflow pixel arithmetic
    OutOfRange,
}

/// Playing field bounds in display pixels
///
/// The region above `min_y` holds the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoardBounds {
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub const fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub const fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Center of the field, rounded toward the minimum corner
    pub const fn center(&self) -> (i32, i32) {
        (
            self.min_x + self.width() / 2,
            self.min_y + self.height() / 2,
        )
    }
}

impl Default for BoardBounds {
    fn default() -> Self {
        Self::new(0, 20, 240, 320)
    }
}

/// Ball parameters applied at every spawn
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BallConfig {
    /// Radius in pixels
    pub radius: i32,
    /// Horizontal speed in pixels per tick
    pub x_speed: f32,
    /// Vertical speed in pixels per tick (negative moves up)
    pub y_speed: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 3,
            x_speed: 1.0,
            y_speed: -1.0,
        }
    }
}

/// Paddle geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaddleConfig {
    /// Height in pixels
    pub height: i32,
    /// Width as a percentage of the board width
    pub width_percent: u8,
    /// Movement step as a percentage of the paddle width
    pub step_percent: u8,
    /// Distance of the top paddle below `min_y`
    pub top_inset: i32,
    /// Distance of the bottom paddle above `max_y`
    pub bottom_inset: i32,
}

impl PaddleConfig {
    /// Paddle width for a board of the given width
    pub const fn width_for(&self, board_width: i32) -> i32 {
        (board_width as i64 * self.width_percent as i64 / 100) as i32
    }

    /// Movement step for a paddle of the given width, never zero
    pub const fn step_for(&self, paddle_width: i32) -> i32 {
        let step = (paddle_width as i64 * self.step_percent as i64 / 100) as i32;
        if step < 1 {
            1
        } else {
            step
        }
    }
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            height: 5,
            width_percent: 15,
            step_percent: 25,
            top_inset: 5,
            bottom_inset: 10,
        }
    }
}

/// Reactive opponent switches, one per paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AiConfig {
    /// Top paddle follows the ball
    pub player_one: bool,
    /// Bottom paddle follows the ball
    pub player_two: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            player_one: true,
            player_two: true,
        }
    }
}

/// Timer, frame and input timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Simulation tick interval (ms)
    pub tick_ms: u32,
    /// Main loop redraw interval (ms)
    pub frame_ms: u32,
    /// Button debounce window (ms)
    pub debounce_ms: u32,
    /// Only advance the simulation while in the Game state
    pub freeze_when_paused: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 20,
            frame_ms: 20,
            debounce_ms: 50,
            freeze_when_paused: false,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub bounds: BoardBounds,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub ai: AiConfig,
    pub timing: TimingConfig,
}

impl GameConfig {
    /// Check that the configuration describes a playable board
    ///
    /// Also guarantees that every paddle and ball coordinate derived from
    /// it fits in an `i32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = &self.bounds;
        let width = bounds.max_x as i64 - bounds.min_x as i64;
        let height = bounds.max_y as i64 - bounds.min_y as i64;
        if width <= 0 || height <= 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if !fits(width) || !fits(height) {
            return Err(ConfigError::OutOfRange);
        }

        let diameter = self.ball.radius as i64 * 2;
        if self.ball.radius <= 0 || diameter >= width || diameter >= height {
            return Err(ConfigError::BallTooLarge);
        }
        if !self.ball.x_speed.is_finite() || !self.ball.y_speed.is_finite() {
            return Err(ConfigError::InvalidSpeed);
        }

        let paddle = &self.paddle;
        if !(1..=100).contains(&paddle.width_percent) || !(1..=100).contains(&paddle.step_percent)
        {
            return Err(ConfigError::InvalidPercent);
        }
        if paddle.height <= 0 || paddle.width_for(width as i32) <= 0 {
            return Err(ConfigError::PaddleTooThin);
        }

        let top_y = bounds.min_y as i64 + paddle.top_inset as i64;
        let bottom_y = bounds.max_y as i64 - paddle.bottom_inset as i64;
        let paddle_height = paddle.height as i64;
        if !fits(top_y)
            || !fits(bottom_y)
            || !fits(top_y + paddle_height)
            || !fits(bottom_y + paddle_height)
        {
            return Err(ConfigError::OutOfRange);
        }

        if self.timing.tick_ms == 0 || self.timing.frame_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(())
    }
}

fn fits(value: i64) -> bool {
    i32::try_from(value).is_ok()
}
