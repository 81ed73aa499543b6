//! Theme-aware drawing context.
//!
//! Renderers and editables draw through `DrawContext`, which wraps a
//! `&mut dyn DisplayDriver` and gives access to the resolved theme.

use crate::backend::{DisplayDriver, RectMode};
use crate::color::Color;
use crate::error::Result;
use crate::font::Font;
use crate::geometry::{Point, Rectangle, text_dimensions, text_inscribe};
use crate::theme::MenuTheme;

/// Drawing context wrapping a display driver and theme.
pub struct DrawContext<'a> {
    pub display: &'a mut dyn DisplayDriver,
    pub theme: &'a MenuTheme,
}

impl<'a> DrawContext<'a> {
    pub fn new(display: &'a mut dyn DisplayDriver, theme: &'a MenuTheme) -> Self {
        Self { display, theme }
    }

    // -- Convenience drawing methods --

    /// Fill the whole screen with the background color.
    pub fn clear(&mut self) -> Result<()> {
        self.display.clear(self.theme.background, self.theme.screen)
    }

    /// Draw the title band with `text` centered in it.
    pub fn title_bar(&mut self, text: &str) -> Result<()> {
        let band = self.theme.title_rect();
        self.display.fill_rect(self.theme.title_bg, band)?;
        let font = self.theme.title_font;
        let pos = text_inscribe(band, font, text);
        self.display
            .draw_string(font, self.theme.title_text, self.theme.title_bg, pos, text)
    }

    /// Draw a label in the menu font on the screen background.
    pub fn label(&mut self, text: &str, pos: Point) -> Result<()> {
        self.display.draw_string(
            self.theme.menu_font,
            self.theme.item_text,
            self.theme.background,
            pos,
            text,
        )
    }

    /// Draw a label in the menu font, centered inside `rect`.
    pub fn label_centered(
        &mut self,
        text: &str,
        rect: Rectangle,
        fg: Color,
        bg: Color,
    ) -> Result<()> {
        let font = self.theme.menu_font;
        let pos = text_inscribe(rect, font, text);
        self.display.draw_string(font, fg, bg, pos, text)
    }

    /// Draw `text` so its right edge sits on `anchor.x`.
    pub fn label_right(
        &mut self,
        font: Font,
        fg: Color,
        bg: Color,
        anchor: Point,
        text: &str,
    ) -> Result<()> {
        let w = text_dimensions(font, text).w;
        let pos = Point::new(anchor.x.wrapping_sub(w), anchor.y);
        self.display.draw_string(font, fg, bg, pos, text)
    }

    /// Draw a one-pixel rectangle outline.
    pub fn outline(&mut self, color: Color, rect: Rectangle) -> Result<()> {
        self.display.draw_rectangle(RectMode::Outline, color, rect)
    }

    /// Draw a horizontal separator at `y` spanning the list row width.
    pub fn separator(&mut self, y: u16) -> Result<()> {
        self.display.draw_line(
            self.theme.split_line,
            Point::new(self.theme.list_line_left, y),
            Point::new(self.theme.list_line_right, y),
        )
    }
}
