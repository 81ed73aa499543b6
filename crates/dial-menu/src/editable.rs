//! Editable values.
//!
//! An `Editable` is the capability behind an `EditValue` item. It reads and
//! writes a live value through a `Slot`, so what is drawn is always the value
//! as it is right now, wherever it lives.

use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{
    AtomicBool, AtomicI16, AtomicI32, AtomicU8, AtomicU16, AtomicU32, Ordering,
};

use crate::context::DrawContext;
use crate::error::Result;
use crate::geometry::{Dimensions, Point, Rectangle};
use crate::input::Direction;

/// A value an item can show and change.
pub trait Editable {
    /// Draw the current value right-aligned against `anchor` (the top-right
    /// corner of the value area).
    fn draw(&self, ctx: &mut DrawContext<'_>, anchor: Point, highlighted: bool) -> Result<()>;

    /// Called on Confirm. Return true to start a multi-step edit, false if
    /// the edit already happened.
    fn enter(&self) -> bool {
        true
    }

    /// Move the value one increment.
    fn step(&self, direction: Direction);

    /// Called when the edit sub-mode ends.
    fn done(&self) {}
}

/// Live storage an editable is bound to.
pub trait Slot<T> {
    fn get(&self) -> T;
    fn set(&self, value: T);
}

impl<T: Copy> Slot<T> for Cell<T> {
    fn get(&self) -> T {
        Cell::get(self)
    }

    fn set(&self, value: T) {
        Cell::set(self, value);
    }
}

macro_rules! atomic_slot {
    ($($atomic:ty => $t:ty),* $(,)?) => {$(
        impl Slot<$t> for $atomic {
            fn get(&self) -> $t {
                self.load(Ordering::Relaxed)
            }

            fn set(&self, value: $t) {
                self.store(value, Ordering::Relaxed);
            }
        }
    )*};
}

atomic_slot! {
    AtomicBool => bool,
    AtomicU8 => u8,
    AtomicU16 => u16,
    AtomicU32 => u32,
    AtomicI16 => i16,
    AtomicI32 => i32,
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

/// Scalar types `EditableNumber` can edit.
pub trait Numeric: Copy + PartialOrd + fmt::Debug {
    /// `self + step`, saturating at the type's range.
    fn increase(self, step: Self) -> Self;
    /// `self - step`, saturating at the type's range.
    fn decrease(self, step: Self) -> Self;
    fn as_f64(self) -> f64;
    fn is_nan(self) -> bool {
        false
    }
}

macro_rules! integer_numeric {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            fn increase(self, step: Self) -> Self {
                self.saturating_add(step)
            }

            fn decrease(self, step: Self) -> Self {
                self.saturating_sub(step)
            }

            fn as_f64(self) -> f64 {
                f64::from(self)
            }
        }
    )*};
}

integer_numeric!(u8, u16, u32, i16, i32);

impl Numeric for f32 {
    fn increase(self, step: Self) -> Self {
        self + step
    }

    fn decrease(self, step: Self) -> Self {
        self - step
    }

    fn as_f64(self) -> f64 {
        f64::from(self)
    }

    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

/// Placeholder shown for a value that is not a number.
const NAN_TEXT: &str = "---";

/// A number stepped by a fixed increment within `[min, max]`.
pub struct EditableNumber<'a, T> {
    pub value: &'a dyn Slot<T>,
    pub min: T,
    pub max: T,
    pub step: T,
}

impl<'a, T: Numeric> EditableNumber<'a, T> {
    pub const fn new(value: &'a dyn Slot<T>, min: T, max: T, step: T) -> Self {
        Self {
            value,
            min,
            max,
            step,
        }
    }

    /// Decimal places shown: `round(-log10(step))`, never negative.
    pub fn frac_digits(&self) -> u8 {
        let step = self.step.as_f64().abs();
        if step <= 0.0 || !step.is_finite() {
            return 0;
        }
        (-step.log10()).round().clamp(0.0, 9.0) as u8
    }

    /// Integer places shown, enough for the wider of `min` and `max`.
    pub fn int_digits(&self) -> u8 {
        let widest = self.min.as_f64().abs().max(self.max.as_f64().abs());
        if widest < 1.0 {
            1
        } else {
            (widest.log10().floor() as u8).saturating_add(1)
        }
    }

    /// Width of the value field in glyphs, including sign and decimal point.
    fn field_chars(&self) -> u16 {
        let frac = u16::from(self.frac_digits());
        let point = u16::from(frac > 0);
        let sign = u16::from(self.min.as_f64() < 0.0);
        sign + u16::from(self.int_digits()) + point + frac
    }

    fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

impl<T: Numeric> Editable for EditableNumber<'_, T> {
    fn draw(&self, ctx: &mut DrawContext<'_>, anchor: Point, highlighted: bool) -> Result<()> {
        let theme = ctx.theme;
        let font = theme.menu_font;
        let fg = theme.value_text;
        let bg = if highlighted {
            theme.value_edit_bg
        } else {
            theme.value_bg
        };
        let value = self.value.get();
        let width = font.char_size().w.wrapping_mul(self.field_chars());
        let pos = Point::new(anchor.x.wrapping_sub(width), anchor.y);

        if value.is_nan() {
            // Blank the whole field so a shorter placeholder leaves no digits behind.
            let field = Dimensions::new(width, font.char_size().h).at_point(pos);
            ctx.display.fill_rect(bg, field)?;
            return ctx.label_right(font, fg, bg, anchor, NAN_TEXT);
        }

        let frac = self.frac_digits();
        let raw = (value.as_f64() * 10f64.powi(i32::from(frac))).round() as i32;
        ctx.display
            .draw_numeric_value(font, fg, bg, self.int_digits(), frac, pos, raw)
    }

    fn step(&self, direction: Direction) {
        let current = self.value.get();
        let next = if current.is_nan() {
            self.min
        } else {
            match direction {
                Direction::Increase => current.increase(self.step),
                Direction::Decrease => current.decrease(self.step),
            }
        };
        let next = self.clamp(next);
        log::trace!("Stepped {current:?} -> {next:?}");
        self.value.set(next);
    }
}

// ---------------------------------------------------------------------------
// Booleans
// ---------------------------------------------------------------------------

/// A checkbox. Confirm toggles it in place without entering edit mode.
pub struct EditableBool<'a> {
    pub value: &'a dyn Slot<bool>,
}

impl<'a> EditableBool<'a> {
    pub const fn new(value: &'a dyn Slot<bool>) -> Self {
        Self { value }
    }
}

impl Editable for EditableBool<'_> {
    fn draw(&self, ctx: &mut DrawContext<'_>, anchor: Point, _highlighted: bool) -> Result<()> {
        let theme = ctx.theme;
        let side = theme.menu_font.char_size().h + 1;
        let tl = Point::new(anchor.x.wrapping_sub(side), anchor.y.wrapping_sub(1));
        let outer = Rectangle::new(tl, Point::new(anchor.x, tl.y.wrapping_add(side)));
        let inner = Rectangle::new(outer.tl.offset(2, 2), outer.br.offset(-2, -2));
        let fill = if self.value.get() {
            theme.check
        } else {
            theme.value_bg
        };
        ctx.outline(theme.value_text, outer)?;
        ctx.display.fill_rect(fill, inner)
    }

    fn enter(&self) -> bool {
        self.value.set(!self.value.get());
        false
    }

    fn step(&self, _direction: Direction) {}
}
