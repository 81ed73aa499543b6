//! RGB565 colors, the display controller's native pixel format.

/// A 16-bit RGB565 color: 5 bits red, 6 bits green, 5 bits blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u16);

impl Color {
    /// Pack channels: `r` and `b` in 0..=31, `g` in 0..=63. Extra bits are
    /// masked off.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0x1f) as u16) << 11) | (((g & 0x3f) as u16) << 5) | ((b & 0x1f) as u16))
    }

    /// Down-convert 8-bit channels.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r >> 3, g >> 2, b >> 3)
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn red(self) -> u8 {
        ((self.0 >> 11) & 0x1f) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3f) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0x1f) as u8
    }

    pub const WHITE: Self = Self::rgb(0x1f, 0x3f, 0x1f);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const YELLOW: Self = Self::rgb(0x1f, 0x3f, 0x00);
    pub const RED: Self = Self::rgb(0x1f, 0x00, 0x00);

    // -- Stock firmware palette --
    pub const ERROR_RED: Self = Self::rgb(0x16, 0x00, 0x00);
    pub const BG_RED: Self = Self::rgb(0x1e, 0x00, 0x0f);
    pub const BG_WINDOW: Self = Self::rgb(0x06, 0x0f, 0x08);
    pub const BG_BLUE: Self = Self::rgb(0x02, 0x09, 0x05);
    pub const BG_BLACK: Self = Self::rgb(0x01, 0x02, 0x01);
    pub const ICON_BLUE: Self = Self::rgb(0x08, 0x2f, 0x1a);
    pub const POPUP_TEXT: Self = Self::rgb(0x1a, 0x35, 0x1a);
    pub const SPLIT_LINE: Self = Self::rgb(0x07, 0x13, 0x0a);
    pub const CURSOR: Self = Self::rgb(0x1d, 0x31, 0x0f);
    pub const PERCENT: Self = Self::rgb(0x1f, 0x31, 0x09);
    pub const BAR_FILL: Self = Self::rgb(0x02, 0x07, 0x04);
    pub const SELECT: Self = Self::rgb(0x06, 0x1d, 0x1b);
    pub const CHECK: Self = Self::from_bits(0x4e5c);
}

/// Parse "#RRGGBB" into the nearest RGB565 color.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if s.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(s.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(s.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(s.get(4..6)?, 16).ok()?;
    Some(Color::from_rgb888(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_is_all_ones() {
        assert_eq!(Color::WHITE.bits(), 0xffff);
        assert_eq!(Color::BLACK.bits(), 0x0000);
    }

    #[test]
    fn channels_unpack() {
        let c = Color::rgb(0x1d, 0x31, 0x0f);
        assert_eq!(c.red(), 0x1d);
        assert_eq!(c.green(), 0x31);
        assert_eq!(c.blue(), 0x0f);
    }

    #[test]
    fn rgb_masks_overflowing_channels() {
        assert_eq!(Color::rgb(0xff, 0xff, 0xff), Color::WHITE);
    }

    #[test]
    fn rgb888_down_converts() {
        assert_eq!(Color::from_rgb888(255, 255, 255), Color::WHITE);
        assert_eq!(Color::from_rgb888(255, 0, 0), Color::RED);
    }

    #[test]
    fn parse_hex_colors() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some(Color::WHITE));
        assert_eq!(parse_hex_color("#000000"), Some(Color::BLACK));
        assert_eq!(parse_hex_color("FFFFFF"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
    }
}
