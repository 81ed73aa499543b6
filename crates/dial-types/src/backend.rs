//! Display driver trait.
//!
//! The engine never talks to the display controller directly. Every draw goes
//! through `DisplayDriver`, whose methods mirror the controller's command set.
//! Calls are synchronous: when a method returns, the command has been issued.

use crate::color::Color;
use crate::error::Result;
use crate::font::Font;
use crate::geometry::{Dimensions, Point, Rectangle};
use crate::icon::Icon;

/// How `draw_rectangle` paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RectMode {
    /// One-pixel border only.
    Outline,
    /// Solid fill.
    Fill,
}

/// Drawing primitives provided by the display controller.
///
/// # Core Methods (required)
///
/// `draw_rectangle`, `draw_line`, `draw_string`, `show_icon`,
/// `draw_numeric_value`, and `flush`.
///
/// # Convenience Methods (defaults)
///
/// `fill_rect` and `clear` are expressed in terms of `draw_rectangle`.
#[allow(clippy::too_many_arguments)]
pub trait DisplayDriver {
    /// Draw a rectangle outline or a filled rectangle.
    fn draw_rectangle(&mut self, mode: RectMode, color: Color, rect: Rectangle) -> Result<()>;

    /// Draw a one-pixel line.
    fn draw_line(&mut self, color: Color, from: Point, to: Point) -> Result<()>;

    /// Draw `text` with its top-left corner at `pos`, glyph cells filled
    /// with `bg`.
    fn draw_string(
        &mut self,
        font: Font,
        fg: Color,
        bg: Color,
        pos: Point,
        text: &str,
    ) -> Result<()>;

    /// Show an icon from the controller's icon library at `pos`.
    fn show_icon(&mut self, icon: Icon, pos: Point) -> Result<()>;

    /// Draw a fixed-point number.
    ///
    /// `raw` is the value scaled by `10^frac_digits`. The controller pads the
    /// integer part to `int_digits` and inserts the decimal point.
    fn draw_numeric_value(
        &mut self,
        font: Font,
        fg: Color,
        bg: Color,
        int_digits: u8,
        frac_digits: u8,
        pos: Point,
        raw: i32,
    ) -> Result<()>;

    /// Push any buffered commands to the panel.
    fn flush(&mut self) -> Result<()>;

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, color: Color, rect: Rectangle) -> Result<()> {
        self.draw_rectangle(RectMode::Fill, color, rect)
    }

    /// Fill the whole screen.
    fn clear(&mut self, color: Color, screen: Dimensions) -> Result<()> {
        self.fill_rect(color, screen.at_point(Point::ORIGIN))
    }
}
