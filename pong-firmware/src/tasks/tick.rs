//! Tick task for the simulation clock

use defmt::*;
use embassy_time::{Duration, Ticker};

use pong_core::input::InputEvent;

use crate::channels::post_input;

/// Tick task - posts a `Tick` every `interval_ms`
#[embassy_executor::task]
pub async fn tick_task(interval_ms: u32) {
    info!("Tick task started ({} ms)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms as u64));

    loop {
        ticker.next().await;
        post_input(InputEvent::Tick);
    }
}
