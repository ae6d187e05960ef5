//! Game simulation
//!
//! Fixed-timestep physics for balls and paddles. One call to
//! [`Board::move_balls`] is one tick.

pub mod ball;
pub mod board;
pub mod paddle;

pub use ball::{Ball, BallMove};
pub use board::{Board, BoardError};
pub use paddle::Paddle;

/// One of the two players
///
/// Player one defends the top edge with paddle 0 and scores when a ball
/// leaves through the bottom. Player two defends the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Index of this player's paddle and score
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}
