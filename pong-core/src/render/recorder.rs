//! Display double that records every call

use std::string::String;
use std::vec::Vec;

use crate::traits::{Color, DisplayDriver, DisplayError, Font, TextAlign};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Clear(Color),
    SetColor(Color),
    FillCircle(i32, i32, i32),
    FillRect(i32, i32, i32, i32),
    SetFont(Font),
    Text(i32, i32, String, TextAlign),
}

#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub calls: Vec<Call>,
    fail_after: Option<usize>,
    draws: usize,
}

impl Recorder {
    /// Recorder whose drawing calls fail after `limit` successes
    pub fn failing_after(limit: usize) -> Self {
        Self {
            fail_after: Some(limit),
            ..Self::default()
        }
    }

    fn draw(&mut self, call: Call) -> Result<(), DisplayError> {
        if let Some(limit) = self.fail_after {
            if self.draws >= limit {
                return Err(DisplayError::Communication);
            }
        }
        self.draws += 1;
        self.calls.push(call);
        Ok(())
    }
}

impl DisplayDriver for Recorder {
    fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
        self.draw(Call::Clear(color))
    }

    fn set_color(&mut self, color: Color) {
        self.calls.push(Call::SetColor(color));
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32) -> Result<(), DisplayError> {
        self.draw(Call::FillCircle(x, y, radius))
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), DisplayError> {
        self.draw(Call::FillRect(x, y, width, height))
    }

    fn set_font(&mut self, font: Font) {
        self.calls.push(Call::SetFont(font));
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        align: TextAlign,
    ) -> Result<(), DisplayError> {
        self.draw(Call::Text(x, y, text.into(), align))
    }
}
