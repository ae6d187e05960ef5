//! Embassy async tasks
//!
//! Each task runs independently and reports through the input channel.

pub mod buttons;
pub mod tick;

pub use buttons::button_task;
pub use tick::tick_task;
