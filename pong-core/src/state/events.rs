//! Events that trigger state transitions

use crate::input::Button;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Onboard (select) button pressed
    OnboardPress,
    /// Secondary (pause) button pressed
    SecondaryPress,
}

impl Event {
    /// State event raised by a button, if any
    ///
    /// The paddle buttons act on the board directly and never change state.
    pub fn from_button(button: Button) -> Option<Self> {
        match button {
            Button::Onboard => Some(Event::OnboardPress),
            Button::Secondary => Some(Event::SecondaryPress),
            Button::Left | Button::Right => None,
        }
    }
}
