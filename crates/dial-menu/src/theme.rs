//! Runtime theme: colors and pixel geometry the renderers read.
//!
//! `MenuTheme` is resolved once from `DialConfig`. Renderers never look at
//! the config directly, and never hardcode a coordinate that lives here.

use crate::color::{Color, parse_hex_color};
use crate::config::DialConfig;
use crate::font::Font;
use crate::geometry::{Dimensions, Point, Rectangle};

/// Resolved colors and geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTheme {
    // -- Screen --
    /// Panel resolution.
    pub screen: Dimensions,
    pub title_font: Font,
    pub menu_font: Font,
    pub title_height: u16,

    // -- List rows --
    pub list_padding: u16,
    pub list_cursor_width: u16,
    pub list_icon_margin: u16,
    pub list_icon_size: Dimensions,
    pub list_text_offset: u16,
    pub list_more_x: u16,
    pub list_value_right: u16,
    pub list_line_left: u16,
    pub list_line_right: u16,

    // -- Icon grid --
    /// Height of the label band at the bottom of each cell.
    pub icon_text_height: u16,
    pub logo_pos: Point,

    // -- Colors --
    pub background: Color,
    pub title_bg: Color,
    pub title_text: Color,
    pub item_text: Color,
    pub item_bg: Color,
    pub highlight: Color,
    pub cursor: Color,
    pub split_line: Color,
    pub value_text: Color,
    pub value_bg: Color,
    pub value_edit_bg: Color,
    pub check: Color,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self::from_config(&DialConfig::default())
    }
}

impl MenuTheme {
    /// Resolve a theme from configuration. Malformed colors fall back to the
    /// stock palette with a warning.
    pub fn from_config(config: &DialConfig) -> Self {
        let c = &config.colors;
        let l = &config.layout;
        Self {
            screen: Dimensions::new(config.screen.width, config.screen.height),
            title_font: l.title_font,
            menu_font: l.menu_font,
            title_height: l.title_height,
            list_padding: l.list_padding,
            list_cursor_width: l.list_cursor_width,
            list_icon_margin: l.list_icon_margin,
            list_icon_size: Dimensions::new(l.list_icon_width, l.list_icon_height),
            list_text_offset: l.list_text_offset,
            list_more_x: l.list_more_x,
            list_value_right: l.list_value_right,
            list_line_left: l.list_line_left,
            list_line_right: l.list_line_right,
            icon_text_height: l.icon_text_height,
            logo_pos: Point::new(l.logo_x, l.logo_y),
            background: resolve("background", &c.background, Color::BG_BLACK),
            title_bg: resolve("title_bg", &c.title_bg, Color::BG_BLUE),
            title_text: resolve("title_text", &c.title_text, Color::WHITE),
            item_text: resolve("item_text", &c.item_text, Color::WHITE),
            item_bg: resolve("item_bg", &c.item_bg, Color::BG_BLUE),
            highlight: resolve("highlight", &c.highlight, Color::WHITE),
            cursor: resolve("cursor", &c.cursor, Color::CURSOR),
            split_line: resolve("split_line", &c.split_line, Color::SPLIT_LINE),
            value_text: resolve("value_text", &c.value_text, Color::WHITE),
            value_bg: resolve("value_bg", &c.value_bg, Color::BG_BLACK),
            value_edit_bg: resolve("value_edit_bg", &c.value_edit_bg, Color::SELECT),
            check: resolve("check", &c.check, Color::CHECK),
        }
    }

    /// The title bar band.
    pub fn title_rect(&self) -> Rectangle {
        Dimensions::new(self.screen.w, self.title_height).at_point(Point::ORIGIN)
    }

    /// Vertical distance between list rows.
    pub fn list_row_pitch(&self) -> u16 {
        self.list_icon_size.h + 2 * self.list_padding + 1
    }

    /// Y coordinate of the top of list row `row`.
    pub fn list_row_top(&self, row: usize) -> u16 {
        self.title_height
            .wrapping_add(self.list_row_pitch().wrapping_mul(row as u16))
    }

    pub fn list_icon_pos(&self, row: usize) -> Point {
        Point::new(
            self.list_cursor_width + self.list_icon_margin,
            self.list_row_top(row) + self.list_padding,
        )
    }

    pub fn list_label_pos(&self, row: usize) -> Point {
        let icon = self.list_icon_pos(row);
        let glyph_h = self.menu_font.char_size().h;
        Point::new(
            icon.x + self.list_icon_size.w + self.list_text_offset,
            icon.y + self.list_icon_size.h.saturating_sub(glyph_h) / 2,
        )
    }

    /// Top-right corner values on row `row` are aligned against.
    pub fn list_value_anchor(&self, row: usize) -> Point {
        Point::new(self.list_value_right, self.list_label_pos(row).y)
    }

    /// The cursor bar to the left of row `row`.
    pub fn list_cursor_rect(&self, row: usize) -> Rectangle {
        let top = self.list_row_top(row);
        Rectangle::new(
            Point::new(0, top),
            Point::new(self.list_cursor_width, top + self.list_row_pitch() - 1),
        )
    }

    /// Y coordinate of the separator under row `row`.
    pub fn list_separator_y(&self, row: usize) -> u16 {
        self.list_row_top(row) + self.list_row_pitch() - 1
    }
}

fn resolve(name: &str, hex: &str, fallback: Color) -> Color {
    parse_hex_color(hex).unwrap_or_else(|| {
        log::warn!("Invalid color `{hex}` for `{name}` -- using default");
        fallback
    })
}
