//! Screen geometry: points, sizes, rectangles, and grids.
//!
//! Coordinates are unsigned 16-bit pixels, matching the display controller.
//! All arithmetic wraps; nothing here checks bounds. A layout that pushes a
//! coordinate past zero ends up on the far side of the coordinate space.

use crate::font::Font;

/// A pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Translate by a signed offset (wrapping).
    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x.wrapping_add_signed(dx),
            y: self.y.wrapping_add_signed(dy),
        }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub w: u16,
    pub h: u16,
}

impl Dimensions {
    pub const fn new(w: u16, h: u16) -> Self {
        Self { w, h }
    }

    /// The rectangle of this size whose top-left corner is `p`.
    pub const fn at_point(self, p: Point) -> Rectangle {
        Rectangle {
            tl: p,
            br: Point {
                x: p.x.wrapping_add(self.w),
                y: p.y.wrapping_add(self.h),
            },
        }
    }
}

/// An axis-aligned rectangle given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub tl: Point,
    pub br: Point,
}

impl Rectangle {
    pub const fn new(tl: Point, br: Point) -> Self {
        Self { tl, br }
    }

    /// The bottom `height` pixels of this rectangle.
    pub const fn bottom(self, height: u16) -> Self {
        Self {
            tl: Point {
                x: self.tl.x,
                y: self.br.y.wrapping_sub(height),
            },
            br: self.br,
        }
    }

    pub const fn width(self) -> u16 {
        self.br.x.wrapping_sub(self.tl.x)
    }

    pub const fn height(self) -> u16 {
        self.br.y.wrapping_sub(self.tl.y)
    }

    /// Whether `p` lies inside, edges included.
    pub const fn contains(self, p: Point) -> bool {
        p.x >= self.tl.x && p.x <= self.br.x && p.y >= self.tl.y && p.y <= self.br.y
    }
}

/// A regular grid of cells: `origin` is cell (0, 0), `step` the cell pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    pub origin: Point,
    pub step: Dimensions,
}

impl Grid {
    pub const fn new(origin: Point, step: Dimensions) -> Self {
        Self { origin, step }
    }

    /// Pixel origin of the cell at `(col, row)`.
    pub const fn at(self, col: u8, row: u8) -> Point {
        Point {
            x: self
                .origin
                .x
                .wrapping_add(self.step.w.wrapping_mul(col as u16)),
            y: self
                .origin
                .y
                .wrapping_add(self.step.h.wrapping_mul(row as u16)),
        }
    }
}

/// Start coordinate that centers a span of `size` between `a` and `b`.
///
/// Computed as `a + (b - a - size) / 2` with the difference taken in signed
/// 32-bit and truncating division, then wrapped back into `u16`. When the span
/// does not fit (`size > b - a`) the result wraps around.
pub const fn center(size: u16, a: u16, b: u16) -> u16 {
    let offset = (b as i32 - a as i32 - size as i32) / 2;
    (a as i32 + offset) as u16
}

/// Pixel size of `text` rendered in `font`.
pub const fn text_dimensions(font: Font, text: &str) -> Dimensions {
    let cell = font.char_size();
    Dimensions {
        w: cell.w.wrapping_mul(text.len() as u16),
        h: cell.h,
    }
}

/// Top-left position that centers `text` inside `rect` on both axes.
pub const fn text_inscribe(rect: Rectangle, font: Font, text: &str) -> Point {
    let d = text_dimensions(font, text);
    Point {
        x: center(d.w, rect.tl.x, rect.br.x),
        y: center(d.h, rect.tl.y, rect.br.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_at_maps_cells() {
        let grid = Grid::new(Point::new(17, 130), Dimensions::new(128, 116));
        assert_eq!(grid.at(0, 0), Point::new(17, 130));
        assert_eq!(grid.at(1, 0), Point::new(145, 130));
        assert_eq!(grid.at(1, 1), Point::new(145, 246));
    }

    #[test]
    fn at_point_builds_rect() {
        let r = Dimensions::new(109, 99).at_point(Point::new(17, 130));
        assert_eq!(r.tl, Point::new(17, 130));
        assert_eq!(r.br, Point::new(126, 229));
        assert_eq!(r.width(), 109);
        assert_eq!(r.height(), 99);
    }

    #[test]
    fn bottom_slice() {
        let r = Rectangle::new(Point::new(10, 10), Point::new(110, 110));
        let b = r.bottom(40);
        assert_eq!(b.tl, Point::new(10, 70));
        assert_eq!(b.br, Point::new(110, 110));
    }

    #[test]
    fn bottom_taller_than_rect_wraps() {
        let r = Rectangle::new(Point::new(0, 0), Point::new(10, 10));
        assert_eq!(r.bottom(20).tl.y, 65526);
    }

    #[test]
    fn center_truncates() {
        assert_eq!(center(20, 0, 100), 40);
        assert_eq!(center(21, 0, 100), 39);
        assert_eq!(center(3, 10, 20), 13);
    }

    #[test]
    fn center_oversized_wraps() {
        // (10 - 0 - 20) / 2 = -5, wrapped into u16.
        assert_eq!(center(20, 0, 10), 65531);
    }

    #[test]
    fn text_dimensions_fixed_width() {
        let d = text_dimensions(Font::F8x16, "Prepare");
        assert_eq!(d, Dimensions::new(56, 16));
        assert_eq!(text_dimensions(Font::F10x20, ""), Dimensions::new(0, 20));
    }

    #[test]
    fn inscribe_centers_both_axes() {
        let rect = Rectangle::new(Point::new(17, 189), Point::new(126, 229));
        let p = text_inscribe(rect, Font::F8x16, "Print");
        // width 40 in 109 -> 17 + 34; height 16 in 40 -> 189 + 12
        assert_eq!(p, Point::new(51, 201));
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Point::new(5, 5).offset(-10, 3), Point::new(65531, 8));
    }

    #[test]
    fn contains_edges() {
        let r = Rectangle::new(Point::new(0, 0), Point::new(10, 10));
        assert!(r.contains(Point::new(10, 10)));
        assert!(!r.contains(Point::new(11, 0)));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn inscribed_text_stays_inside(
                x in 0u16..200,
                y in 0u16..200,
                w in 0u16..250,
                h in 0u16..100,
                len in 0usize..30,
            ) {
                let text = "x".repeat(len);
                let rect = Dimensions::new(w, h).at_point(Point::new(x, y));
                let d = text_dimensions(Font::F8x16, &text);
                prop_assume!(d.w <= w && d.h <= h);
                let p = text_inscribe(rect, Font::F8x16, &text);
                prop_assert!(p.x >= rect.tl.x);
                prop_assert!(p.y >= rect.tl.y);
                prop_assert!(p.x + d.w <= rect.br.x);
                prop_assert!(p.y + d.h <= rect.br.y);
            }
        }
    }
}
