//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic
//! and hardware-specific implementations.

pub mod display;

pub use display::{Color, DisplayDriver, DisplayError, DisplayExt, Font, TextAlign};
