//! Game context
//!
//! Owns the board, the current state and the pending input events. The
//! main loop feeds events in with [`Game::post`] from whatever delivers
//! them (interrupts, tasks, tests) and calls [`Game::run_frame`] at a fixed
//! cadence; all mutation happens inside that call.

use crate::config::{ConfigError, GameConfig};
use crate::input::queue::DEFAULT_QUEUE_LEN;
use crate::input::{Button, EventQueue, InputEvent};
use crate::render;
use crate::sim::{Board, Player};
use crate::state::{Event, State};
use crate::traits::{DisplayDriver, DisplayError};

/// Explicit simulation context
#[derive(Debug, Clone)]
pub struct Game<const Q: usize = DEFAULT_QUEUE_LEN> {
    config: GameConfig,
    board: Board,
    state: State,
    queue: EventQueue<Q>,
    ticks: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            board: Board::default(),
            state: State::default(),
            queue: EventQueue::new(),
            ticks: 0,
        }
    }
}

impl<const Q: usize> Game<Q> {
    /// Create a game in the Menu state
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            board: Board::new(&config)?,
            config,
            state: State::default(),
            queue: EventQueue::new(),
            ticks: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Number of ticks that advanced the simulation
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Events evicted from a full queue
    pub fn dropped_events(&self) -> u32 {
        self.queue.dropped()
    }

    /// Queue an event for the next frame
    ///
    /// Returns false if the queue was full and the oldest event was lost.
    pub fn post(&mut self, event: InputEvent) -> bool {
        self.queue.push(event)
    }

    /// Apply one event immediately
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Tick => {
                if !self.config.timing.freeze_when_paused || self.state.is_playing() {
                    self.board.move_balls();
                    self.ticks = self.ticks.wrapping_add(1);
                }
            }
            InputEvent::Press(Button::Left) => self.board.paddle_mut(Player::One).move_left(),
            InputEvent::Press(Button::Right) => self.board.paddle_mut(Player::One).move_right(),
            InputEvent::Press(button) => {
                if let Some(event) = Event::from_button(button) {
                    self.state = self.state.transition(event);
                }
            }
        }
    }

    /// Apply every queued event in arrival order
    ///
    /// Returns the number of events handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.queue.pop() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    /// Draw the current state
    pub fn render<D>(&mut self, display: &mut D) -> Result<(), DisplayError>
    where
        D: DisplayDriver + ?Sized,
    {
        render::draw_state(self.state, &self.board, display)?;
        if self.state == State::Game {
            self.board.mark_balls_drawn();
        }
        Ok(())
    }

    /// One main-loop iteration: drain pending events, then draw
    pub fn run_frame<D>(&mut self, display: &mut D) -> Result<(), DisplayError>
    where
        D: DisplayDriver + ?Sized,
    {
        self.process_pending();
        self.render(display)
    }

    /// Back to the menu with a fresh board
    pub fn reset(&mut self) {
        self.board.reset_game();
        self.state = State::Menu;
        self.queue.clear();
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recorder::{Call, Recorder};
    use crate::traits::Color;

    fn press(button: Button) -> InputEvent {
        InputEvent::Press(button)
    }

    #[test]
    fn test_starts_in_menu() {
        let game: Game = Game::default();
        assert_eq!(game.state(), State::Menu);
        assert_eq!(game.board().balls().len(), 1);
    }

    #[test]
    fn test_new_validates_config() {
        let mut config = GameConfig::default();
        config.timing.frame_ms = 0;
        assert!(matches!(
            Game::<4>::new(config),
            Err(ConfigError::ZeroInterval)
        ));
    }

    #[test]
    fn test_button_flow_through_states() {
        let mut game: Game = Game::default();

        game.post(press(Button::Secondary));
        game.process_pending();
        assert_eq!(game.state(), State::Menu);

        game.post(press(Button::Onboard));
        game.process_pending();
        assert_eq!(game.state(), State::Game);

        game.post(press(Button::Onboard));
        game.process_pending();
        assert_eq!(game.state(), State::Game);

        game.post(press(Button::Secondary));
        game.process_pending();
        assert_eq!(game.state(), State::Pause);

        game.post(press(Button::Onboard));
        game.process_pending();
        assert_eq!(game.state(), State::Menu);
    }

    #[test]
    fn test_events_apply_in_order() {
        let mut game: Game = Game::default();
        game.post(press(Button::Onboard));
        game.post(press(Button::Secondary));
        game.post(press(Button::Secondary));
        game.post(press(Button::Secondary));
        assert_eq!(game.process_pending(), 4);
        // Menu -> Game -> Pause -> Game -> Pause
        assert_eq!(game.state(), State::Pause);
    }

    #[test]
    fn test_paddle_buttons_work_in_any_state() {
        let mut game: Game = Game::default();
        game.board_mut().set_ai_enabled(Player::One, false);

        game.handle(press(Button::Left));
        assert_eq!(game.board().paddle(Player::One).left(), 93);

        game.handle(press(Button::Onboard));
        game.handle(press(Button::Secondary));
        assert_eq!(game.state(), State::Pause);
        game.handle(press(Button::Right));
        game.handle(press(Button::Right));
        assert_eq!(game.board().paddle(Player::One).left(), 111);
        assert_eq!(game.board().paddle(Player::Two).left(), 102);
    }

    #[test]
    fn test_ticks_advance_in_every_state_by_default() {
        let mut game: Game = Game::default();
        for _ in 0..10 {
            game.post(InputEvent::Tick);
        }
        game.process_pending();
        assert_eq!(game.ticks(), 10);
        let ball = game.board().balls()[0];
        assert_eq!((ball.x(), ball.y()), (130.0, 160.0));
    }

    #[test]
    fn test_freeze_when_paused() {
        let mut config = GameConfig::default();
        config.timing.freeze_when_paused = true;
        let mut game: Game = Game::new(config).unwrap();

        game.handle(InputEvent::Tick);
        assert_eq!(game.ticks(), 0);

        game.handle(press(Button::Onboard));
        game.handle(InputEvent::Tick);
        assert_eq!(game.ticks(), 1);

        game.handle(press(Button::Secondary));
        game.handle(InputEvent::Tick);
        assert_eq!(game.ticks(), 1);
        assert_eq!(game.board().balls()[0].pixel(), (121, 169));
    }

    #[test]
    fn test_run_frame_draws_current_state() {
        let mut game: Game = Game::default();
        let mut display = Recorder::default();

        game.run_frame(&mut display).unwrap();
        assert_eq!(display.calls.as_slice(), &[Call::Clear(Color::Blue)]);

        game.post(press(Button::Onboard));
        game.post(InputEvent::Tick);
        let mut display = Recorder::default();
        game.run_frame(&mut display).unwrap();
        assert_eq!(display.calls[0], Call::Clear(Color::Black));
        assert!(display.calls.contains(&Call::FillCircle(121, 169, 3)));
        assert_eq!(game.board().balls()[0].last_drawn(), Some((121, 169)));
    }

    #[test]
    fn test_full_queue_keeps_latest_press() {
        let mut game: Game<2> = Game::new(GameConfig::default()).unwrap();
        game.post(InputEvent::Tick);
        game.post(InputEvent::Tick);
        assert!(!game.post(press(Button::Onboard)));
        assert_eq!(game.dropped_events(), 1);

        game.process_pending();
        assert_eq!(game.state(), State::Game);
        assert_eq!(game.ticks(), 1);
    }

    #[test]
    fn test_reset() {
        let mut game: Game = Game::default();
        game.handle(press(Button::Onboard));
        game.board_mut().increment_score(Player::Two);
        game.handle(InputEvent::Tick);
        game.post(InputEvent::Tick);

        game.reset();

        assert_eq!(game.state(), State::Menu);
        assert_eq!(game.board().scores(), (0, 0));
        assert_eq!(game.ticks(), 0);
        assert_eq!(game.process_pending(), 0);
    }
}
