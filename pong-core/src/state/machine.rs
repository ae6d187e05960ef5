//! State machine definition
//!
//! The screen drawn each frame is a function of the current state only.
//! There is no terminal state; the game runs until power-off.

use super::events::Event;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Title screen shown after power-on
    #[default]
    Menu,
    /// Game suspended by the player
    Pause,
    /// Match in progress
    Game,
}

impl State {
    /// Check if the match is being played
    pub fn is_playing(&self) -> bool {
        matches!(self, State::Game)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Menu, OnboardPress) => Game,

            (Game, SecondaryPress) => Pause,

            (Pause, SecondaryPress) => Game,
            (Pause, OnboardPress) => Menu,

            // Default: stay in current state
            _ => self,
        }
    }
}
