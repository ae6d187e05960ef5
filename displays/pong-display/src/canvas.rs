//! `DisplayDriver` adapter over an embedded-graphics draw target

use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PointsIter, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use pong_core::traits::{Color, DisplayDriver, DisplayError, Font, TextAlign};

/// Game display on top of a binary-color draw target
///
/// Shapes and text are drawn solid: black turns pixels off and every
/// other color turns them on. Full-screen clears use the fill patterns
/// listed in the crate docs.
pub struct GraphicsCanvas<D> {
    target: D,
    color: Color,
    font: Font,
}

impl<D> GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            color: Color::White,
            font: Font::Small,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    fn ink(&self) -> BinaryColor {
        BinaryColor::from(self.color != Color::Black)
    }

    fn mono_font(&self) -> &'static MonoFont<'static> {
        match self.font {
            Font::Small => &FONT_5X8,
            Font::Large => &FONT_6X10,
        }
    }
}

/// Pixel value of a full-screen fill at `point`
fn pattern(color: Color, point: Point) -> BinaryColor {
    let on = match color {
        Color::Black => false,
        Color::White => true,
        Color::Blue => (point.x + point.y).rem_euclid(2) == 0,
        Color::Red => point.y.rem_euclid(2) == 0,
    };
    BinaryColor::from(on)
}

impl<D> DisplayDriver for GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
        let result = match color {
            Color::Black => self.target.clear(BinaryColor::Off),
            Color::White => self.target.clear(BinaryColor::On),
            Color::Blue | Color::Red => {
                let area = self.target.bounding_box();
                let colors = area.points().map(|point| pattern(color, point));
                self.target.fill_contiguous(&area, colors)
            }
        };
        result.map_err(|_| DisplayError::Communication)
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32) -> Result<(), DisplayError> {
        if radius < 0 {
            return Ok(());
        }
        let diameter = radius as u32 * 2 + 1;
        Circle::with_center(Point::new(x, y), diameter)
            .into_styled(PrimitiveStyle::with_fill(self.ink()))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), DisplayError> {
        if width <= 0 || height <= 0 {
            return Ok(());
        }
        Rectangle::new(Point::new(x, y), Size::new(width as u32, height as u32))
            .into_styled(PrimitiveStyle::with_fill(self.ink()))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        align: TextAlign,
    ) -> Result<(), DisplayError> {
        let width = self.target.bounding_box().size.width as i32;
        let (anchor, alignment) = match align {
            TextAlign::Left => (x, Alignment::Left),
            TextAlign::Center => (width / 2 + x, Alignment::Center),
            TextAlign::Right => (width - x, Alignment::Right),
        };

        let character_style = MonoTextStyle::new(self.mono_font(), self.ink());
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();

        Text::with_text_style(text, Point::new(anchor, y), character_style, text_style)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}
