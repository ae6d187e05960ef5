//! State machine for the game screens
//!
//! Defines which screen is shown and how button presses move between them.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
