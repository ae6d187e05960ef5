//! Ball physics
//!
//! Each tick the ball moves by exactly its velocity, then boundary and
//! paddle checks run in priority order:
//!
//! 1. Top/bottom edge: the ball is out and the opposing player scores
//! 2. Left/right wall: horizontal velocity points back into the field and
//!    the position is mirrored about the wall, then clamped one radius in
//! 3. Paddle overlap: vertical velocity points back toward the center
//!
//! Collision is a one-step overlap test, not a swept test. A ball moving
//! faster than a paddle is tall can pass through it.

use super::{Paddle, Player};
use crate::config::{BallConfig, BoardBounds};

/// Outcome of one ball step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BallMove {
    /// Ball is still on the field
    InPlay,
    /// Ball left the field; the player scores and the ball is removed
    Scored(Player),
}

/// A ball on the board
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ball {
    x: f32,
    y: f32,
    radius: i32,
    x_speed: f32,
    y_speed: f32,
    last_drawn: Option<(i32, i32)>,
}

impl Ball {
    pub fn new(x: f32, y: f32, config: &BallConfig) -> Self {
        Self {
            x,
            y,
            radius: config.radius,
            x_speed: config.x_speed,
            y_speed: config.y_speed,
            last_drawn: None,
        }
    }

    /// Ball at the center of the board
    pub fn centered(bounds: &BoardBounds, config: &BallConfig) -> Self {
        let (x, y) = bounds.center();
        Self::new(x as f32, y as f32, config)
    }

    /// Replace the velocity
    pub fn with_velocity(mut self, x_speed: f32, y_speed: f32) -> Self {
        self.x_speed = x_speed;
        self.y_speed = y_speed;
        self
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.x_speed, self.y_speed)
    }

    /// Pixel position used for drawing
    pub fn pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    /// Position recorded by the last render pass
    pub fn last_drawn(&self) -> Option<(i32, i32)> {
        self.last_drawn
    }

    pub fn mark_drawn(&mut self) {
        self.last_drawn = Some(self.pixel());
    }

    /// Advance one tick
    ///
    /// `paddles[0]` is the top paddle and `paddles[1]` the bottom one.
    pub fn advance(&mut self, bounds: &BoardBounds, paddles: &[Paddle; 2]) -> BallMove {
        self.x += self.x_speed;
        self.y += self.y_speed;

        let r = self.radius as f32;
        let min_x = bounds.min_x as f32;
        let max_x = bounds.max_x as f32;

        if self.y - r <= bounds.min_y as f32 {
            return BallMove::Scored(Player::Two);
        } else if self.y + r >= bounds.max_y as f32 {
            return BallMove::Scored(Player::One);
        } else if self.x - r <= min_x {
            self.x_speed = abs(self.x_speed);
            self.x = abs(self.x - min_x) + min_x;
            self.x = self.x.max(min_x + r);
        } else if self.x + r >= max_x {
            self.x_speed = -abs(self.x_speed);
            self.x = max_x - abs(self.x - max_x);
            self.x = self.x.min(max_x - r);
        }

        let [top, bottom] = paddles;
        if self.y - r <= top.bottom_edge() as f32 && top.spans(self.x) {
            self.y_speed = abs(self.y_speed);
        } else if self.y + r >= bottom.top_edge() as f32 && bottom.spans(self.x) {
            self.y_speed = -abs(self.y_speed);
        }

        BallMove::InPlay
    }
}

/// `f32::abs` without std
fn abs(value: f32) -> f32 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}
