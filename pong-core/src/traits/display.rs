//! Display driver trait
//!
//! The game only needs a handful of filled primitives and one line of
//! text. Anything that can draw those can host the game.

use crate::sim::{Ball, Paddle};

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or link error talking to the panel
    Communication,
}

/// Colors used by the game screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Blue,
    Red,
}

/// Text fonts, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    #[default]
    Small,
    Large,
}

/// Horizontal text placement
///
/// - `Left`: text starts at `x`
/// - `Center`: text is centered on the display, shifted right by `x`
/// - `Right`: text ends `x` pixels from the right edge of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Trait for the display collaborator
///
/// Shape and text calls use the current color set by [`set_color`].
/// Coordinates are display pixels; shapes may extend past the panel and
/// are clipped by the implementation.
///
/// [`set_color`]: DisplayDriver::set_color
pub trait DisplayDriver {
    /// Fill the entire screen with one color
    fn clear(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Select the color for subsequent shapes and text
    fn set_color(&mut self, color: Color);

    /// Fill a circle centered on `(x, y)`
    fn fill_circle(&mut self, x: i32, y: i32, radius: i32) -> Result<(), DisplayError>;

    /// Fill a rectangle with its top-left corner at `(x, y)`
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), DisplayError>;

    /// Select the font for subsequent text
    fn set_font(&mut self, font: Font);

    /// Draw one line of text with its top edge at `y`
    fn draw_text(&mut self, x: i32, y: i32, text: &str, align: TextAlign)
        -> Result<(), DisplayError>;
}

/// Helper trait for drawing game objects
pub trait DisplayExt: DisplayDriver {
    fn draw_ball(&mut self, ball: &Ball) -> Result<(), DisplayError> {
        let (x, y) = ball.pixel();
        self.fill_circle(x, y, ball.radius())
    }

    fn draw_paddle(&mut self, paddle: &Paddle) -> Result<(), DisplayError> {
        let (x, y) = paddle.position();
        self.fill_rect(x, y, paddle.width(), paddle.height())
    }
}

// Blanket implementation for all DisplayDriver types
impl<T: DisplayDriver + ?Sized> DisplayExt for T {}
