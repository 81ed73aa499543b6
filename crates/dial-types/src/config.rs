//! Display configuration loaded from TOML.
//!
//! Every field has a default matching the stock portrait layout, so an empty
//! file (or no file at all) yields a working configuration. Colors are kept as
//! `"#RRGGBB"` strings here and resolved by the menu theme.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::font::Font;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    pub screen: ScreenConfig,
    pub colors: ColorConfig,
    pub layout: LayoutConfig,
}

impl DialConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::debug!("Loaded display config from {}", path.display());
        Ok(config)
    }
}

/// Panel resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 272,
            height: 480,
        }
    }
}

/// Color palette as hex strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorConfig {
    /// Screen background.
    #[serde(default = "default_background")]
    pub background: String,
    /// Title bar fill.
    #[serde(default = "default_title_bg")]
    pub title_bg: String,
    /// Title text.
    #[serde(default = "default_white")]
    pub title_text: String,
    /// Item label text.
    #[serde(default = "default_white")]
    pub item_text: String,
    /// Icon-grid label background.
    #[serde(default = "default_title_bg")]
    pub item_bg: String,
    /// Icon-grid selection outline.
    #[serde(default = "default_white")]
    pub highlight: String,
    /// List cursor bar.
    #[serde(default = "default_cursor")]
    pub cursor: String,
    /// Separator line under list rows.
    #[serde(default = "default_split_line")]
    pub split_line: String,
    /// Editable value text.
    #[serde(default = "default_white")]
    pub value_text: String,
    /// Editable value background.
    #[serde(default = "default_background")]
    pub value_bg: String,
    /// Editable value background while editing.
    #[serde(default = "default_select")]
    pub value_edit_bg: String,
    /// Checkbox fill when set.
    #[serde(default = "default_check")]
    pub check: String,
}

fn default_background() -> String {
    "#080808".to_string()
}
fn default_title_bg() -> String {
    "#102428".to_string()
}
fn default_white() -> String {
    "#FFFFFF".to_string()
}
fn default_cursor() -> String {
    "#E8C478".to_string()
}
fn default_split_line() -> String {
    "#384C50".to_string()
}
fn default_select() -> String {
    "#3074D8".to_string()
}
fn default_check() -> String {
    "#48C8E0".to_string()
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            title_bg: default_title_bg(),
            title_text: default_white(),
            item_text: default_white(),
            item_bg: default_title_bg(),
            highlight: default_white(),
            cursor: default_cursor(),
            split_line: default_split_line(),
            value_text: default_white(),
            value_bg: default_background(),
            value_edit_bg: default_select(),
            check: default_check(),
        }
    }
}

/// Pixel geometry of titles, list rows, and icon cells.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub title_font: Font,
    pub menu_font: Font,
    pub title_height: u16,
    /// Vertical padding above and below a list row's icon.
    pub list_padding: u16,
    /// Width of the cursor bar at the left edge of list rows.
    pub list_cursor_width: u16,
    /// Gap between the cursor bar and the row icon.
    pub list_icon_margin: u16,
    pub list_icon_width: u16,
    pub list_icon_height: u16,
    /// Gap between the row icon and the label.
    pub list_text_offset: u16,
    /// X position of the "more" indicator on submenu rows.
    pub list_more_x: u16,
    /// Right edge values are aligned against.
    pub list_value_right: u16,
    pub list_line_left: u16,
    pub list_line_right: u16,
    /// Height of the label band at the bottom of icon cells.
    pub icon_text_height: u16,
    pub logo_x: u16,
    pub logo_y: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title_font: Font::F10x20,
            menu_font: Font::F8x16,
            title_height: 30,
            list_padding: 13,
            list_cursor_width: 14,
            list_icon_margin: 12,
            list_icon_width: 26,
            list_icon_height: 26,
            list_text_offset: 20,
            list_more_x: 226,
            list_value_right: 256,
            list_line_left: 16,
            list_line_right: 256,
            icon_text_height: 40,
            logo_x: 71,
            logo_y: 72,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = DialConfig::from_toml("").unwrap();
        assert_eq!(cfg.screen.width, 272);
        assert_eq!(cfg.screen.height, 480);
        assert_eq!(cfg.layout.title_height, 30);
        assert_eq!(cfg.layout.menu_font, Font::F8x16);
        assert_eq!(cfg.colors.highlight, "#FFFFFF");
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let toml = r##"
[screen]
width = 480
height = 272

[colors]
cursor = "#FF0000"

[layout]
title_height = 24
menu_font = "F10x20"
"##;
        let cfg = DialConfig::from_toml(toml).unwrap();
        assert_eq!(cfg.screen.width, 480);
        assert_eq!(cfg.colors.cursor, "#FF0000");
        assert_eq!(cfg.colors.background, default_background());
        assert_eq!(cfg.layout.title_height, 24);
        assert_eq!(cfg.layout.menu_font, Font::F10x20);
        assert_eq!(cfg.layout.list_padding, 13);
    }

    #[test]
    fn wrong_type_is_an_error() {
        let err = DialConfig::from_toml("[screen]\nwidth = \"wide\"").unwrap_err();
        assert!(format!("{err}").contains("TOML parse error"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dial.toml");
        std::fs::write(&path, "[layout]\nicon_text_height = 32\n").unwrap();
        let cfg = DialConfig::load(&path).unwrap();
        assert_eq!(cfg.layout.icon_text_height, 32);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = DialConfig::load(Path::new("/nonexistent/dial.toml")).unwrap_err();
        assert!(format!("{err}").contains("I/O error"));
    }
}
