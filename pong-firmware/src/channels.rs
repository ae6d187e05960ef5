//! Inter-task communication channels
//!
//! Input tasks push events from interrupt context; the frame loop drains
//! them into the game once per frame.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use pong_core::input::InputEvent;

/// Channel capacity for input events
const INPUT_CHANNEL_SIZE: usize = 16;

/// Button presses and ticks waiting for the next frame
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Queue an event without waiting
///
/// Producers never block; a full channel drops the event.
pub fn post_input(event: InputEvent) {
    if INPUT_CHANNEL.try_send(event).is_err() {
        defmt::warn!("Input channel full, dropped {:?}", event);
    }
}
