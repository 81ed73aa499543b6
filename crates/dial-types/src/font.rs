//! Fixed-size bitmap fonts built into the display controller.
//!
//! Every glyph in a font occupies the same cell, so text width is simply
//! `char_width * len`. There are no variable-width glyphs.

use serde::{Deserialize, Serialize};

use crate::geometry::Dimensions;

/// A controller font, identified by its cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    F6x12,
    F8x16,
    F10x20,
    F12x24,
    F14x28,
    F16x32,
    F20x40,
    F24x48,
    F28x56,
    F32x64,
}

impl Font {
    /// Font index as understood by the controller (0x00..=0x09).
    pub const fn index(self) -> u8 {
        match self {
            Font::F6x12 => 0x00,
            Font::F8x16 => 0x01,
            Font::F10x20 => 0x02,
            Font::F12x24 => 0x03,
            Font::F14x28 => 0x04,
            Font::F16x32 => 0x05,
            Font::F20x40 => 0x06,
            Font::F24x48 => 0x07,
            Font::F28x56 => 0x08,
            Font::F32x64 => 0x09,
        }
    }

    /// Glyph cell size in pixels.
    pub const fn char_size(self) -> Dimensions {
        match self {
            Font::F6x12 => Dimensions::new(6, 12),
            Font::F8x16 => Dimensions::new(8, 16),
            Font::F10x20 => Dimensions::new(10, 20),
            Font::F12x24 => Dimensions::new(12, 24),
            Font::F14x28 => Dimensions::new(14, 28),
            Font::F16x32 => Dimensions::new(16, 32),
            Font::F20x40 => Dimensions::new(20, 40),
            Font::F24x48 => Dimensions::new(24, 48),
            Font::F28x56 => Dimensions::new(28, 56),
            Font::F32x64 => Dimensions::new(32, 64),
        }
    }
}
