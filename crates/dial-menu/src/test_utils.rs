//! Shared test utilities for dial-menu tests.
//!
//! Provides a [`MockDisplay`] that records all draw calls for assertion.

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::{DisplayDriver, RectMode};
use crate::color::Color;
use crate::error::{DialError, Result};
use crate::font::Font;
use crate::geometry::{Point, Rectangle};
use crate::icon::Icon;

/// A recorded draw call from the mock display.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum DrawCall {
    Rect {
        mode: RectMode,
        color: Color,
        rect: Rectangle,
    },
    Line {
        color: Color,
        from: Point,
        to: Point,
    },
    String {
        font: Font,
        fg: Color,
        bg: Color,
        pos: Point,
        text: String,
    },
    Icon {
        icon: Icon,
        pos: Point,
    },
    Number {
        fg: Color,
        bg: Color,
        int_digits: u8,
        frac_digits: u8,
        pos: Point,
        raw: i32,
    },
    Flush,
}

/// A mock display that records all draw calls for test assertions.
///
/// When a journal is attached, every call also appends a short tag to it so
/// tests can interleave draw activity with hook or callback side effects.
pub struct MockDisplay {
    pub calls: Vec<DrawCall>,
    journal: Option<Rc<RefCell<Vec<String>>>>,
    fail: bool,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            journal: None,
            fail: false,
        }
    }

    /// A mock that mirrors its calls into a shared journal.
    pub fn with_journal(journal: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            journal: Some(journal),
            ..Self::new()
        }
    }

    /// A mock whose every call fails with `DialError::Display`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// Count of filled rectangles.
    pub fn fill_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect { mode: RectMode::Fill, .. }))
            .count()
    }

    /// Count of `flush` calls.
    pub fn flush_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Flush))
            .count()
    }

    /// Drawn strings as `(text, pos)`, in call order.
    pub fn strings(&self) -> Vec<(&str, Point)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::String { text, pos, .. } => Some((text.as_str(), *pos)),
                _ => None,
            })
            .collect()
    }

    /// Just the text of each drawn string.
    pub fn texts(&self) -> Vec<&str> {
        self.strings().into_iter().map(|(t, _)| t).collect()
    }

    /// Shown icons as `(icon, pos)`, in call order.
    pub fn icons(&self) -> Vec<(Icon, Point)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Icon { icon, pos } => Some((*icon, *pos)),
                _ => None,
            })
            .collect()
    }

    /// Raw values passed to `draw_numeric_value`.
    pub fn numbers(&self) -> Vec<i32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Number { raw, .. } => Some(*raw),
                _ => None,
            })
            .collect()
    }

    /// Rectangles drawn in `mode` with `color`.
    pub fn rects(&self, mode: RectMode, color: Color) -> Vec<Rectangle> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect {
                    mode: m,
                    color: col,
                    rect,
                } if *m == mode && *col == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, tag: &str, call: DrawCall) -> Result<()> {
        if self.fail {
            return Err(DialError::Display(format!("{tag} rejected")));
        }
        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(tag.to_string());
        }
        self.calls.push(call);
        Ok(())
    }
}

impl DisplayDriver for MockDisplay {
    fn draw_rectangle(&mut self, mode: RectMode, color: Color, rect: Rectangle) -> Result<()> {
        self.record("rect", DrawCall::Rect { mode, color, rect })
    }

    fn draw_line(&mut self, color: Color, from: Point, to: Point) -> Result<()> {
        self.record("line", DrawCall::Line { color, from, to })
    }

    fn draw_string(
        &mut self,
        font: Font,
        fg: Color,
        bg: Color,
        pos: Point,
        text: &str,
    ) -> Result<()> {
        self.record(
            "string",
            DrawCall::String {
                font,
                fg,
                bg,
                pos,
                text: text.to_string(),
            },
        )
    }

    fn show_icon(&mut self, icon: Icon, pos: Point) -> Result<()> {
        self.record("icon", DrawCall::Icon { icon, pos })
    }

    fn draw_numeric_value(
        &mut self,
        _font: Font,
        fg: Color,
        bg: Color,
        int_digits: u8,
        frac_digits: u8,
        pos: Point,
        raw: i32,
    ) -> Result<()> {
        self.record(
            "number",
            DrawCall::Number {
                fg,
                bg,
                int_digits,
                frac_digits,
                pos,
                raw,
            },
        )
    }

    fn flush(&mut self) -> Result<()> {
        self.record("flush", DrawCall::Flush)
    }
}
