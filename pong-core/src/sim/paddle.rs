//! Paddle movement

use crate::config::{BoardBounds, PaddleConfig};

/// A paddle sliding along the top or bottom edge
///
/// Keeps a copy of the board bounds so moves can clamp without reaching
/// back into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Paddle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    step: i32,
    bounds: BoardBounds,
}

impl Paddle {
    /// Create a paddle at `y`, horizontally centered on the board
    pub fn new(y: i32, bounds: BoardBounds, config: &PaddleConfig) -> Self {
        let width = config.width_for(bounds.width());
        Self {
            x: bounds.min_x + (bounds.width() - width) / 2,
            y,
            width,
            height: config.height,
            step: config.step_for(width),
            bounds,
        }
    }

    /// Top paddle, just below the scoreboard
    pub fn top(bounds: BoardBounds, config: &PaddleConfig) -> Self {
        Self::new(bounds.min_y + config.top_inset, bounds, config)
    }

    /// Bottom paddle, just above the lower edge
    pub fn bottom(bounds: BoardBounds, config: &PaddleConfig) -> Self {
        Self::new(bounds.max_y - config.bottom_inset, bounds, config)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top_edge(&self) -> i32 {
        self.y
    }

    pub fn bottom_edge(&self) -> i32 {
        self.y + self.height
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Distance covered by one move
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Whether `x` lies within the paddle span, edges included
    pub fn spans(&self, x: f32) -> bool {
        x >= self.left() as f32 && x <= self.right() as f32
    }

    pub fn move_left(&mut self) {
        self.x = self.x.saturating_sub(self.step).max(self.bounds.min_x);
    }

    pub fn move_right(&mut self) {
        self.x = self.x.saturating_add(self.step).min(self.bounds.max_x - self.width);
    }

    /// Reactive opponent: step toward `target_x` if it is outside the span
    pub fn track(&mut self, target_x: i32) {
        if target_x < self.left() {
            self.move_left();
        } else if target_x > self.right() {
            self.move_right();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_paddle() -> Paddle {
        Paddle::top(BoardBounds::default(), &PaddleConfig::default())
    }

    #[test]
    fn test_initial_geometry() {
        let bounds = BoardBounds::default();
        let config = PaddleConfig::default();

        let top = Paddle::top(bounds, &config);
        assert_eq!(top.position(), (102, 25));
        assert_eq!((top.left(), top.right()), (102, 138));
        assert_eq!((top.top_edge(), top.bottom_edge()), (25, 30));

        let bottom = Paddle::bottom(bounds, &config);
        assert_eq!(bottom.position(), (102, 310));
    }

    #[test]
    fn test_centered_on_offset_board() {
        let bounds = BoardBounds::new(100, 0, 200, 100);
        let paddle = Paddle::top(bounds, &PaddleConfig::default());
        // 15 wide, centered in [100, 200)
        assert_eq!(paddle.left(), 142);
    }

    #[test]
    fn test_moves_by_quarter_width() {
        let mut paddle = default_paddle();
        paddle.move_left();
        assert_eq!(paddle.left(), 93);
        paddle.move_right();
        paddle.move_right();
        assert_eq!(paddle.left(), 111);
    }

    #[test]
    fn test_clamps_at_walls() {
        let mut paddle = default_paddle();
        for _ in 0..50 {
            paddle.move_left();
        }
        assert_eq!(paddle.left(), 0);

        for _ in 0..50 {
            paddle.move_right();
        }
        assert_eq!(paddle.right(), 240);
        assert_eq!(paddle.left(), 204);
    }

    #[test]
    fn test_track() {
        let mut paddle = default_paddle();

        // Inside the span: no move
        paddle.track(120);
        assert_eq!(paddle.left(), 102);
        paddle.track(102);
        assert_eq!(paddle.left(), 102);

        paddle.track(50);
        assert_eq!(paddle.left(), 93);

        paddle.track(200);
        assert_eq!(paddle.left(), 102);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_on_board(moves in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut paddle = default_paddle();
            for right in moves {
                if right {
                    paddle.move_right();
                } else {
                    paddle.move_left();
                }
                prop_assert!(paddle.left() >= 0);
                prop_assert!(paddle.left() <= 240 - paddle.width());
            }
        }
    }
}
