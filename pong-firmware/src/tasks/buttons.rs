//! Button tasks
//!
//! One task per button. Buttons are active low with the internal pull-up;
//! each falling edge that passes the debouncer becomes a `Press` event.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use pong_core::input::{Button, Debouncer, InputEvent};

use crate::channels::post_input;

/// One instance per `Button`
#[embassy_executor::task(pool_size = 4)]
pub async fn button_task(mut input: Input<'static>, button: Button, debounce_ms: u32) {
    info!("Button task started: {:?}", button);

    let mut debouncer = Debouncer::new(debounce_ms);

    loop {
        input.wait_for_falling_edge().await;

        let now_ms = Instant::now().as_millis() as u32;
        if debouncer.accept(now_ms) {
            debug!("{:?} pressed", button);
            post_input(InputEvent::Press(button));
        } else {
            trace!("{:?} bounce ignored", button);
        }
    }
}
