//! Board: balls, paddles, bounds and scores
//!
//! The board owns every simulated object. `move_balls` is the per-tick
//! step: physics for each ball, scoring, respawn, then the reactive
//! opponent for each AI-controlled paddle.

use heapless::Vec;

use super::{Ball, BallMove, Paddle, Player};
use crate::config::{BallConfig, BoardBounds, ConfigError, GameConfig, PaddleConfig, MAX_BALLS};

/// Board operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// Ball collection is already at `MAX_BALLS`
    BallCapacity,
}

/// The playing field
#[derive(Debug, Clone)]
pub struct Board {
    bounds: BoardBounds,
    ball_config: BallConfig,
    paddle_config: PaddleConfig,
    balls: Vec<Ball, MAX_BALLS>,
    paddles: [Paddle; 2],
    scores: [u32; 2],
    ai_enabled: [bool; 2],
}

impl Default for Board {
    fn default() -> Self {
        // The default config is always valid
        Self::build(&GameConfig::default())
    }
}

impl Board {
    /// Create a board with one centered ball and two centered paddles
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &GameConfig) -> Self {
        let bounds = config.bounds;
        let mut balls = Vec::new();
        let pushed = balls.push(Ball::centered(&bounds, &config.ball));
        debug_assert!(pushed.is_ok());

        Self {
            bounds,
            ball_config: config.ball,
            paddle_config: config.paddle,
            balls,
            paddles: [
                Paddle::top(bounds, &config.paddle),
                Paddle::bottom(bounds, &config.paddle),
            ],
            scores: [0; 2],
            ai_enabled: [config.ai.player_one, config.ai.player_two],
        }
    }

    pub fn bounds(&self) -> &BoardBounds {
        &self.bounds
    }

    /// Balls in spawn order; `balls()[0]` is the one the opponent tracks
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn paddles(&self) -> &[Paddle; 2] {
        &self.paddles
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[player.index()]
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        &mut self.paddles[player.index()]
    }

    /// Add a ball at the center with the configured velocity
    pub fn spawn_ball(&mut self) -> Result<(), BoardError> {
        let ball = Ball::centered(&self.bounds, &self.ball_config);
        self.balls.push(ball).map_err(|_| BoardError::BallCapacity)
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// `(player one, player two)`
    pub fn scores(&self) -> (u32, u32) {
        (self.scores[0], self.scores[1])
    }

    pub fn increment_score(&mut self, player: Player) {
        let score = &mut self.scores[player.index()];
        *score = score.saturating_add(1);
    }

    /// Enable or disable the reactive opponent on a player's paddle
    pub fn set_ai_enabled(&mut self, player: Player, enabled: bool) {
        self.ai_enabled[player.index()] = enabled;
    }

    pub fn ai_enabled(&self, player: Player) -> bool {
        self.ai_enabled[player.index()]
    }

    /// Advance every ball one tick, then run the reactive opponent
    ///
    /// Scored balls are removed in place, keeping the order of the others.
    /// A fresh ball is spawned when the last one leaves the field.
    pub fn move_balls(&mut self) {
        let mut i = 0;
        while i < self.balls.len() {
            match self.balls[i].advance(&self.bounds, &self.paddles) {
                BallMove::InPlay => i += 1,
                BallMove::Scored(player) => {
                    self.increment_score(player);
                    self.balls.remove(i);
                }
            }
        }

        if self.balls.is_empty() {
            let spawned = self.spawn_ball();
            debug_assert!(spawned.is_ok());
        }

        // Bottom paddle first, then top; the opponent sees whole pixels
        let target_x = self.balls[0].x() as i32;
        for player in [Player::Two, Player::One] {
            if self.ai_enabled(player) {
                self.paddle_mut(player).track(target_x);
            }
        }
    }

    /// Zero the scores, leave one centered ball and recenter both paddles
    pub fn reset_game(&mut self) {
        self.scores = [0; 2];
        self.balls.clear();
        let spawned = self.spawn_ball();
        debug_assert!(spawned.is_ok());
        self.paddles = [
            Paddle::top(self.bounds, &self.paddle_config),
            Paddle::bottom(self.bounds, &self.paddle_config),
        ];
    }

    /// Record the drawn position of every ball
    pub fn mark_balls_drawn(&mut self) {
        for ball in self.balls.iter_mut() {
            ball.mark_drawn();
        }
    }

    #[cfg(test)]
    pub(crate) fn balls_mut(&mut self) -> &mut Vec<Ball, MAX_BALLS> {
        &mut self.balls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board_without_ai() -> Board {
        let mut board = Board::default();
        board.set_ai_enabled(Player::One, false);
        board.set_ai_enabled(Player::Two, false);
        board
    }

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(x, y, &BallConfig::default()).with_velocity(vx, vy)
    }

    #[test]
    fn test_new_board() {
        let board = Board::new(&GameConfig::default()).unwrap();
        assert_eq!(board.balls().len(), 1);
        assert_eq!(board.balls()[0].pixel(), (120, 170));
        assert_eq!(board.scores(), (0, 0));
        assert!(board.ai_enabled(Player::One));
        assert!(board.ai_enabled(Player::Two));
        assert_eq!(board.paddle(Player::One).position(), (102, 25));
        assert_eq!(board.paddle(Player::Two).position(), (102, 310));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.bounds = BoardBounds::new(0, 0, 0, 0);
        assert!(matches!(Board::new(&config), Err(ConfigError::EmptyBoard)));
    }

    #[test]
    fn test_ten_ticks_free_flight() {
        let mut board = Board::default();
        for _ in 0..10 {
            board.move_balls();
        }
        assert_eq!(board.balls().len(), 1);
        assert_eq!((board.balls()[0].x(), board.balls()[0].y()), (130.0, 160.0));
        assert_eq!(board.scores(), (0, 0));
    }

    #[test]
    fn test_spawn_ball_enforces_capacity() {
        let mut board = Board::default();
        for _ in 1..MAX_BALLS {
            assert_eq!(board.spawn_ball(), Ok(()));
        }
        assert_eq!(board.balls().len(), MAX_BALLS);
        assert_eq!(board.spawn_ball(), Err(BoardError::BallCapacity));
        assert_eq!(board.balls().len(), MAX_BALLS);
    }

    #[test]
    fn test_scoring_removes_ball_and_respawns() {
        let mut board = board_without_ai();
        board.balls_mut()[0] = ball(20.0, 24.0, 1.0, -1.0);

        board.move_balls();

        assert_eq!(board.scores(), (0, 1));
        assert_eq!(board.balls().len(), 1);
        assert_eq!(board.balls()[0].pixel(), (120, 170));
        assert_eq!(board.balls()[0].velocity(), (1.0, -1.0));
    }

    #[test]
    fn test_bottom_exit_scores_player_one() {
        let mut board = board_without_ai();
        board.balls_mut()[0] = ball(20.0, 316.0, 1.0, 1.0);
        board.move_balls();
        assert_eq!(board.scores(), (1, 0));
    }

    #[test]
    fn test_removal_keeps_order() {
        let mut board = board_without_ai();
        let balls = board.balls_mut();
        balls.clear();
        balls.push(ball(50.0, 100.0, 1.0, 1.0)).unwrap();
        balls.push(ball(20.0, 24.0, 1.0, -1.0)).unwrap();
        balls.push(ball(60.0, 100.0, 1.0, 1.0)).unwrap();
        balls.push(ball(20.0, 316.0, 1.0, 1.0)).unwrap();
        balls.push(ball(70.0, 100.0, 1.0, 1.0)).unwrap();

        board.move_balls();

        let xs: std::vec::Vec<f32> = board.balls().iter().map(|b| b.x()).collect();
        assert_eq!(xs, [51.0, 61.0, 71.0]);
        assert_eq!(board.scores(), (1, 1));
    }

    #[test]
    fn test_all_balls_scoring_same_tick_respawns_one() {
        let mut board = board_without_ai();
        let balls = board.balls_mut();
        balls.clear();
        balls.push(ball(20.0, 24.0, 1.0, -1.0)).unwrap();
        balls.push(ball(30.0, 24.0, 1.0, -1.0)).unwrap();
        balls.push(ball(40.0, 316.0, 1.0, 1.0)).unwrap();

        board.move_balls();

        assert_eq!(board.scores(), (1, 2));
        assert_eq!(board.balls().len(), 1);
        assert_eq!(board.balls()[0].pixel(), (120, 170));
    }

    #[test]
    fn test_ai_tracks_primary_ball_only() {
        let mut board = Board::default();
        let balls = board.balls_mut();
        balls.clear();
        // Primary ball far left, second ball far right
        balls.push(ball(20.0, 100.0, 0.0, 1.0)).unwrap();
        balls.push(ball(220.0, 100.0, 0.0, 1.0)).unwrap();

        board.move_balls();

        assert_eq!(board.paddle(Player::One).left(), 93);
        assert_eq!(board.paddle(Player::Two).left(), 93);
    }

    #[test]
    fn test_ai_respects_enable_flags() {
        let mut board = Board::default();
        board.set_ai_enabled(Player::One, false);
        board.balls_mut()[0] = ball(220.0, 100.0, 0.0, 1.0);

        board.move_balls();

        assert_eq!(board.paddle(Player::One).left(), 102);
        assert_eq!(board.paddle(Player::Two).left(), 111);
    }

    #[test]
    fn test_ai_holds_when_ball_in_span() {
        let mut board = Board::default();
        for _ in 0..5 {
            board.move_balls();
        }
        assert_eq!(board.paddle(Player::One).left(), 102);
        assert_eq!(board.paddle(Player::Two).left(), 102);
    }

    #[test]
    fn test_ai_uses_whole_pixel_position() {
        let mut board = Board::default();
        // Ends at x 138.5, half a pixel past the paddle's right edge
        board.balls_mut()[0] = ball(138.0, 100.0, 0.5, 0.0);

        board.move_balls();

        assert_eq!(board.balls()[0].x(), 138.5);
        assert_eq!(board.paddle(Player::One).left(), 102);
        assert_eq!(board.paddle(Player::Two).left(), 102);

        board.move_balls();

        assert_eq!(board.paddle(Player::One).left(), 111);
        assert_eq!(board.paddle(Player::Two).left(), 111);
    }

    #[test]
    fn test_scores_saturate() {
        let mut board = Board::default();
        board.scores = [u32::MAX, 0];
        board.increment_score(Player::One);
        assert_eq!(board.score(Player::One), u32::MAX);
    }

    #[test]
    fn test_reset_game() {
        let mut board = Board::default();
        board.increment_score(Player::One);
        board.increment_score(Player::Two);
        board.spawn_ball().unwrap();
        board.paddle_mut(Player::One).move_left();
        for _ in 0..20 {
            board.move_balls();
        }

        board.reset_game();

        assert_eq!(board.scores(), (0, 0));
        assert_eq!(board.balls().len(), 1);
        assert_eq!(board.balls()[0].pixel(), (120, 170));
        assert_eq!(board.paddle(Player::One).position(), (102, 25));
        assert_eq!(board.paddle(Player::Two).position(), (102, 310));
    }

    #[test]
    fn test_mark_balls_drawn() {
        let mut board = Board::default();
        board.move_balls();
        board.mark_balls_drawn();
        assert_eq!(board.balls()[0].last_drawn(), Some((121, 169)));
    }

    proptest! {
        #[test]
        fn prop_board_never_empty_and_scores_monotonic(
            extra_balls in 0usize..MAX_BALLS,
            ticks in 1usize..2000,
            ai_one in any::<bool>(),
            ai_two in any::<bool>(),
        ) {
            let mut board = Board::default();
            board.set_ai_enabled(Player::One, ai_one);
            board.set_ai_enabled(Player::Two, ai_two);
            for _ in 0..extra_balls {
                board.spawn_ball().unwrap();
            }

            let mut last = board.scores();
            for _ in 0..ticks {
                board.move_balls();
                let scores = board.scores();
                prop_assert!(!board.balls().is_empty());
                prop_assert!(board.balls().len() <= MAX_BALLS);
                prop_assert!(scores.0 >= last.0 && scores.1 >= last.1);
                // At most one point per ball per tick
                prop_assert!((scores.0 - last.0) + (scores.1 - last.1) <= MAX_BALLS as u32);
                for paddle in board.paddles() {
                    prop_assert!(paddle.left() >= 0 && paddle.right() <= 240);
                }
                last = scores;
            }
        }
    }
}
