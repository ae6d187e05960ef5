//! Screen rendering
//!
//! One draw routine per state. Every frame redraws the whole screen, so
//! the routines read the board but never depend on the previous frame.

use core::fmt::Write;

use heapless::String;

use crate::sim::Board;
use crate::state::State;
use crate::traits::{Color, DisplayDriver, DisplayError, DisplayExt, Font, TextAlign};

#[cfg(test)]
pub(crate) mod recorder;

/// Background of the menu screen
pub const MENU_COLOR: Color = Color::Blue;

/// Background of the pause screen
pub const PAUSE_COLOR: Color = Color::Red;

/// Room for two full `u32` scores and the leader tag
pub const SCORE_TEXT_LEN: usize = 40;

/// Build the scoreboard line, tagging the leading player
pub fn scoreboard_text(score_one: u32, score_two: u32) -> String<SCORE_TEXT_LEN> {
    let mut text = String::new();
    // Cannot overflow: the longest line is 35 characters
    let _ = write!(text, "SCORE: {} - {}", score_one, score_two);
    if score_one > score_two {
        let _ = text.push_str(" (P1)");
    } else if score_two > score_one {
        let _ = text.push_str(" (P2)");
    }
    text
}

/// Draw the screen for `state`
pub fn draw_state<D>(state: State, board: &Board, display: &mut D) -> Result<(), DisplayError>
where
    D: DisplayDriver + ?Sized,
{
    match state {
        State::Menu => draw_menu(display),
        State::Pause => draw_pause(display),
        State::Game => draw_game(board, display),
    }
}

pub fn draw_menu<D: DisplayDriver + ?Sized>(display: &mut D) -> Result<(), DisplayError> {
    display.clear(MENU_COLOR)
}

pub fn draw_pause<D: DisplayDriver + ?Sized>(display: &mut D) -> Result<(), DisplayError> {
    display.clear(PAUSE_COLOR)
}

/// Scoreboard band above the field, then balls and paddles
pub fn draw_game<D>(board: &Board, display: &mut D) -> Result<(), DisplayError>
where
    D: DisplayDriver + ?Sized,
{
    let bounds = board.bounds();
    display.clear(Color::Black)?;

    display.set_color(Color::White);
    display.fill_rect(bounds.min_x, 0, bounds.width(), bounds.min_y)?;

    display.set_color(Color::Black);
    display.set_font(Font::Small);
    let (score_one, score_two) = board.scores();
    let text = scoreboard_text(score_one, score_two);
    display.draw_text(0, bounds.min_y / 2 - 4, &text, TextAlign::Center)?;

    display.set_color(Color::White);
    for ball in board.balls() {
        display.draw_ball(ball)?;
    }
    for paddle in board.paddles() {
        display.draw_paddle(paddle)?;
    }

    Ok(())
}
