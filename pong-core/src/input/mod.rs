//! Input events
//!
//! Hardware collaborators turn debounced button edges and timer ticks into
//! [`InputEvent`]s. The game applies them in arrival order once per frame.

pub mod debounce;
pub mod queue;

pub use debounce::Debouncer;
pub use queue::EventQueue;

/// Physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// External button 1: player one paddle left
    Left,
    /// External button 2: pause / resume
    Secondary,
    /// External button 3: player one paddle right
    Right,
    /// Onboard button: start from the menu, quit from pause
    Onboard,
}

impl Button {
    /// Every button, in wiring order
    pub const ALL: [Button; 4] = [
        Button::Left,
        Button::Secondary,
        Button::Right,
        Button::Onboard,
    ];
}

/// Events delivered to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Debounced falling edge on a button
    Press(Button),
    /// Periodic simulation tick
    Tick,
}
