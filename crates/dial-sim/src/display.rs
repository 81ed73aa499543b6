//! Character-cell display.
//!
//! `AsciiDisplay` rasterizes draw commands into a grid of 8x16 pixel cells and
//! prints the grid whenever the engine flushes. Glyphs take one cell each
//! whatever the font, so large titles come out narrower than on the panel.

use std::io::Write;

use dial_types::backend::{DisplayDriver, RectMode};
use dial_types::color::Color;
use dial_types::error::Result;
use dial_types::font::Font;
use dial_types::geometry::{Dimensions, Point, Rectangle};
use dial_types::icon::Icon;

const CELL_W: u16 = 8;
const CELL_H: u16 = 16;

pub struct AsciiDisplay<W: Write> {
    out: W,
    cols: usize,
    rows: usize,
    cells: Vec<char>,
    bounds: Rectangle,
    /// Fills in this color are drawn as `>` (the list cursor).
    mark: Color,
}

impl<W: Write> AsciiDisplay<W> {
    pub fn new(out: W, screen: Dimensions, mark: Color) -> Self {
        let cols = usize::from(screen.w / CELL_W).max(1);
        let rows = usize::from(screen.h / CELL_H).max(1);
        Self {
            out,
            cols,
            rows,
            cells: vec![' '; cols * rows],
            bounds: Rectangle::new(
                Point::new(0, 0),
                Point::new(screen.w.saturating_sub(1), screen.h.saturating_sub(1)),
            ),
            mark,
        }
    }

    /// The current frame, one line per cell row.
    pub fn frame(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Cell holding `p`, or `None` when `p` is off screen.
    fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        if !self.bounds.contains(p) {
            return None;
        }
        let col = usize::from(p.x / CELL_W);
        let row = usize::from(p.y / CELL_H);
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    /// Clamp a corner to the grid, so rectangles reaching the screen edge
    /// still paint.
    fn clamped_cell(&self, p: Point) -> (usize, usize) {
        let col = usize::from(p.x / CELL_W).min(self.cols - 1);
        let row = usize::from(p.y / CELL_H).min(self.rows - 1);
        (col, row)
    }

    fn put(&mut self, col: usize, row: usize, ch: char) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = ch;
        }
    }

    fn put_text(&mut self, pos: Point, text: &str) {
        if let Some((col, row)) = self.cell_of(pos) {
            for (i, ch) in text.chars().enumerate() {
                self.put(col + i, row, ch);
            }
        }
    }
}

/// Render a fixed-point value the way the controller does: integer part
/// right-aligned in `int_digits`, then `frac_digits` decimals.
pub fn format_fixed(int_digits: u8, frac_digits: u8, raw: i32) -> String {
    let width = usize::from(int_digits);
    if frac_digits == 0 {
        return format!("{raw:>width$}");
    }
    let scale = 10u32.pow(u32::from(frac_digits));
    let magnitude = raw.unsigned_abs();
    let sign = if raw < 0 { "-" } else { "" };
    let int = format!("{sign}{}", magnitude / scale);
    let frac = magnitude % scale;
    let frac_width = usize::from(frac_digits);
    format!("{int:>width$}.{frac:0frac_width$}")
}

impl<W: Write> DisplayDriver for AsciiDisplay<W> {
    fn draw_rectangle(&mut self, mode: RectMode, color: Color, rect: Rectangle) -> Result<()> {
        let (c0, r0) = self.clamped_cell(rect.tl);
        let (c1, r1) = self.clamped_cell(rect.br);
        match mode {
            RectMode::Fill => {
                let ch = if color == self.mark { '>' } else { ' ' };
                for row in r0..=r1 {
                    for col in c0..=c1 {
                        self.put(col, row, ch);
                    }
                }
            }
            RectMode::Outline => {
                for col in c0..=c1 {
                    self.put(col, r0, '-');
                    self.put(col, r1, '-');
                }
                for row in r0..=r1 {
                    self.put(c0, row, '|');
                    self.put(c1, row, '|');
                }
                for (col, row) in [(c0, r0), (c1, r0), (c0, r1), (c1, r1)] {
                    self.put(col, row, '+');
                }
            }
        }
        Ok(())
    }

    fn draw_line(&mut self, _color: Color, from: Point, to: Point) -> Result<()> {
        let (c0, row) = self.clamped_cell(from);
        let (c1, _) = self.clamped_cell(to);
        for col in c0.min(c1)..=c0.max(c1) {
            self.put(col, row, '-');
        }
        Ok(())
    }

    fn draw_string(
        &mut self,
        font: Font,
        _fg: Color,
        _bg: Color,
        pos: Point,
        text: &str,
    ) -> Result<()> {
        log::trace!("String font {:#04x} at ({}, {}): {text:?}", font.index(), pos.x, pos.y);
        self.put_text(pos, text);
        Ok(())
    }

    fn show_icon(&mut self, _icon: Icon, pos: Point) -> Result<()> {
        if let Some((col, row)) = self.cell_of(pos) {
            self.put(col, row, '*');
        }
        Ok(())
    }

    fn draw_numeric_value(
        &mut self,
        _font: Font,
        _fg: Color,
        _bg: Color,
        int_digits: u8,
        frac_digits: u8,
        pos: Point,
        raw: i32,
    ) -> Result<()> {
        let text = format_fixed(int_digits, frac_digits, raw);
        self.put_text(pos, &text);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let border = "=".repeat(self.cols);
        writeln!(self.out, "{border}\n{}\n{border}", self.frame())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> AsciiDisplay<Vec<u8>> {
        AsciiDisplay::new(Vec::new(), Dimensions::new(272, 480), Color::CURSOR)
    }

    #[test]
    fn grid_size_follows_screen() {
        let d = display();
        assert_eq!((d.cols, d.rows), (34, 30));
        // Trailing blank rows are kept, so count separators rather than lines.
        assert_eq!(d.frame().split('\n').count(), 30);
    }

    #[test]
    fn off_screen_text_is_dropped() {
        let mut d = display();
        d.draw_string(Font::F8x16, Color::WHITE, Color::BLACK, Point::new(280, 0), "Gone")
            .unwrap();
        d.show_icon(Icon::INFO, Point::new(0, 480)).unwrap();
        assert!(d.frame().chars().all(|c| c == '\n'));
    }

    #[test]
    fn strings_and_icons_land_in_cells() {
        let mut d = display();
        d.show_icon(Icon::HOMING, Point::new(26, 43)).unwrap();
        d.draw_string(Font::F8x16, Color::WHITE, Color::BLACK, Point::new(72, 40), "Home")
            .unwrap();
        let frame = d.frame();
        let line = frame.lines().nth(2).unwrap();
        assert_eq!(line, "   *     Home");
    }

    #[test]
    fn cursor_fill_is_marked_other_fills_blank() {
        let mut d = display();
        let bar = Rectangle::new(Point::new(0, 32), Point::new(14, 47));
        d.fill_rect(Color::CURSOR, bar).unwrap();
        assert!(d.frame().lines().nth(2).unwrap().starts_with(">>"));
        d.fill_rect(Color::BG_BLACK, bar).unwrap();
        assert!(d.frame().lines().nth(2).unwrap().is_empty());
    }

    #[test]
    fn outline_draws_corners() {
        let mut d = display();
        let rect = Rectangle::new(Point::new(0, 0), Point::new(24, 32));
        d.draw_rectangle(RectMode::Outline, Color::WHITE, rect).unwrap();
        let frame = d.frame();
        let lines: Vec<_> = frame.lines().collect();
        assert_eq!(lines[0], "+--+");
        assert_eq!(lines[1], "|  |");
        assert_eq!(lines[2], "+--+");
    }

    #[test]
    fn fixed_point_formatting() {
        assert_eq!(format_fixed(3, 1, 125), " 12.5");
        assert_eq!(format_fixed(1, 2, -50), "-0.50");
        assert_eq!(format_fixed(3, 0, 60), " 60");
        assert_eq!(format_fixed(1, 1, 5), "0.5");
    }

    #[test]
    fn flush_prints_frame() {
        let mut d = display();
        d.draw_string(Font::F10x20, Color::WHITE, Color::BLACK, Point::new(0, 0), "Main")
            .unwrap();
        d.flush().unwrap();
        let out = String::from_utf8(d.into_inner()).unwrap();
        assert!(out.starts_with(&"=".repeat(34)));
        assert!(out.contains("\nMain\n"));
    }
}
