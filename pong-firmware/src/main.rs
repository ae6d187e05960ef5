//! Pong - single-board paddle game firmware
//!
//! Firmware binary for RP2040 boards with a 128x64 SH1106 OLED on I2C0
//! and four push buttons. The simulation lives in `pong-core`; this crate
//! wires it to the hardware:
//!
//! - `tick_task` posts the simulation clock
//! - one `button_task` per button posts debounced presses
//! - the main task owns the game, runs one frame per `frame_ms` and
//!   flushes the frame buffer to the panel

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use pong_core::input::Button;
use pong_core::sim::Player;
use pong_core::Game;
use pong_display::{FrameBuffer, GraphicsCanvas, Sh1106};

use crate::channels::INPUT_CHANNEL;
use crate::config::load_config;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});

/// SH1106 modules are rated for 400 kHz
const I2C_FREQUENCY: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pong firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    let mut game: Game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            error!("Configuration rejected: {:?}", e);
            Game::default()
        }
    };
    let timing = game.config().timing;
    info!(
        "Board {}x{}, tick {} ms, frame {} ms",
        game.board().bounds().width(),
        game.board().bounds().height(),
        timing.tick_ms,
        timing.frame_ms
    );

    // Setup I2C0 for the OLED (SDA=GPIO4, SCL=GPIO5)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);

    let mut oled = Sh1106::new(i2c);
    match oled.init().await {
        Ok(()) => info!("OLED initialized"),
        Err(e) => error!("OLED init failed: {:?}", e),
    }

    // Buttons are active low, wired in `Button::ALL` order
    // (Left=GPIO10, Secondary=GPIO11, Right=GPIO12, Onboard=GPIO15)
    let inputs = [
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
    ];

    spawner.spawn(tasks::tick_task(timing.tick_ms)).unwrap();
    for (input, button) in inputs.into_iter().zip(Button::ALL) {
        spawner
            .spawn(tasks::button_task(input, button, timing.debounce_ms))
            .unwrap();
    }

    info!("All tasks spawned, entering frame loop");

    let mut canvas = GraphicsCanvas::new(FrameBuffer::new());
    let mut ticker = Ticker::every(Duration::from_millis(timing.frame_ms as u64));
    let mut state = game.state();
    let mut scores = game.board().scores();

    loop {
        while let Ok(event) = INPUT_CHANNEL.try_receive() {
            if !game.post(event) {
                warn!("Event queue full, oldest event dropped");
            }
        }

        if let Err(e) = game.run_frame(&mut canvas) {
            error!("Render failed: {:?}", e);
        }

        if game.state() != state {
            info!("State: {:?} -> {:?}", state, game.state());
            state = game.state();
        }
        if game.board().scores() != scores {
            scores = game.board().scores();
            info!(
                "Score: P1 {} - P2 {}",
                game.board().score(Player::One),
                game.board().score(Player::Two)
            );
        }

        if let Err(e) = oled.flush(canvas.target()).await {
            error!("OLED flush failed: {:?}", e);
        }

        ticker.next().await;
    }
}
