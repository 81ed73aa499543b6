//! Menu definitions.
//!
//! A menu tree is plain borrowed data. Build it once (usually as locals in the
//! function that owns the engine) and hand the root to `MenuEngine::enter_menu`.
//! Nothing here is ever mutated by the engine; live state is reached through
//! callbacks, predicates, and `Editable` bindings.

use std::fmt;

use crate::editable::Editable;
use crate::geometry::{Dimensions, Grid, Point};
use crate::icon::Icon;

/// Zero-argument action or hook.
pub type Callback<'a> = &'a dyn Fn();

/// Visibility test, evaluated on every redraw and every input dispatch.
pub type Condition<'a> = &'a dyn Fn() -> bool;

/// A complete menu: title, layout, hooks, items.
#[derive(Debug, Clone, Copy)]
pub struct Menu<'a> {
    pub title: Option<&'a str>,
    pub layout: Layout,
    pub hooks: MenuHooks<'a>,
    pub items: &'a [MenuItem<'a>],
}

impl<'a> Menu<'a> {
    /// A single-column list menu without hooks.
    pub const fn list(title: &'a str, items: &'a [MenuItem<'a>]) -> Self {
        Self {
            title: Some(title),
            layout: Layout::List,
            hooks: MenuHooks::NONE,
            items,
        }
    }

    /// An icon-grid menu without hooks.
    pub const fn icons(title: &'a str, layout: IconLayout, items: &'a [MenuItem<'a>]) -> Self {
        Self {
            title: Some(title),
            layout: Layout::Icons(layout),
            hooks: MenuHooks::NONE,
            items,
        }
    }

    pub const fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub const fn with_hooks(mut self, hooks: MenuHooks<'a>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Items whose predicate holds right now, in declaration order.
    pub fn visible_items(&self) -> impl Iterator<Item = &'a MenuItem<'a>> {
        self.items.iter().filter(|item| item.predicate.is_visible())
    }

    pub fn visible_count(&self) -> usize {
        self.visible_items().count()
    }

    /// The `n`-th currently visible item.
    pub fn visible_item(&self, n: usize) -> Option<&'a MenuItem<'a>> {
        self.visible_items().nth(n)
    }
}

/// How a menu is laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Single column, at most four rows on screen, scrolling.
    List,
    /// Fixed grid of icon cells.
    Icons(IconLayout),
}

/// Geometry of an icon-grid menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    /// Size of one cell (icon plus label band).
    pub size: Dimensions,
    /// Cell origin and pitch.
    pub grid: Grid,
    pub columns: u8,
    pub options: IconOptions,
}

impl IconLayout {
    pub const fn new(size: Dimensions, grid: Grid, columns: u8) -> Self {
        Self {
            size,
            grid,
            columns,
            options: IconOptions::Simple,
        }
    }

    pub const fn with_logo(mut self) -> Self {
        self.options = IconOptions::WithLogo;
        self
    }

    /// Top-left corner of the cell showing visible item `index`.
    pub fn cell_origin(&self, index: usize) -> Point {
        let columns = usize::from(self.columns.max(1));
        self.grid
            .at((index % columns) as u8, (index / columns) as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconOptions {
    #[default]
    Simple,
    /// Draw the logo icon above the grid.
    WithLogo,
}

/// Callbacks run when a menu is pushed onto or popped off the stack.
#[derive(Clone, Copy, Default)]
pub struct MenuHooks<'a> {
    pub on_enter: Option<Callback<'a>>,
    pub on_leave: Option<Callback<'a>>,
}

impl<'a> MenuHooks<'a> {
    pub const NONE: Self = Self {
        on_enter: None,
        on_leave: None,
    };

    pub const fn new(on_enter: Callback<'a>, on_leave: Callback<'a>) -> Self {
        Self {
            on_enter: Some(on_enter),
            on_leave: Some(on_leave),
        }
    }
}

impl fmt::Debug for MenuHooks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuHooks")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

/// One row or cell of a menu.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem<'a> {
    pub icons: MenuIcons,
    pub label: &'a str,
    pub action: Action<'a>,
    pub predicate: Predicate<'a>,
}

impl<'a> MenuItem<'a> {
    /// An always-visible item.
    pub const fn new(icons: MenuIcons, label: &'a str, action: Action<'a>) -> Self {
        Self {
            icons,
            label,
            action,
            predicate: Predicate::ALWAYS,
        }
    }

    pub const fn with_predicate(mut self, predicate: Predicate<'a>) -> Self {
        self.predicate = predicate;
        self
    }

    /// The conventional "Back" row.
    pub const fn back() -> Self {
        Self::new(MenuIcons::single(Icon::BACK), "Back", Action::LeaveMenu)
    }

    /// Whether this item's action edits exactly `editable` (same object).
    pub fn edits(&self, editable: &dyn Editable) -> bool {
        match self.action {
            Action::EditValue(own) => {
                std::ptr::addr_eq(std::ptr::from_ref(own), std::ptr::from_ref(editable))
            }
            _ => false,
        }
    }
}

/// Icon shown normally, and optionally a different one while selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuIcons {
    pub normal: Icon,
    pub selected: Option<Icon>,
}

impl MenuIcons {
    pub const fn single(icon: Icon) -> Self {
        Self {
            normal: icon,
            selected: None,
        }
    }

    pub const fn pair(normal: Icon, selected: Icon) -> Self {
        Self {
            normal,
            selected: Some(selected),
        }
    }

    /// The icon to show for the given selection state.
    pub fn for_state(&self, selected: bool) -> Icon {
        match self.selected {
            Some(icon) if selected => icon,
            _ => self.normal,
        }
    }
}

impl From<Icon> for MenuIcons {
    fn from(icon: Icon) -> Self {
        Self::single(icon)
    }
}

/// What Confirm does on an item.
#[derive(Clone, Copy)]
pub enum Action<'a> {
    EnterSubmenu(&'a Menu<'a>),
    LeaveMenu,
    Invoke(Callback<'a>),
    EditValue(&'a dyn Editable),
    NoOp,
}

impl fmt::Debug for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnterSubmenu(menu) => f
                .debug_tuple("EnterSubmenu")
                .field(&menu.title.unwrap_or(""))
                .finish(),
            Self::LeaveMenu => f.write_str("LeaveMenu"),
            Self::Invoke(_) => f.write_str("Invoke"),
            Self::EditValue(_) => f.write_str("EditValue"),
            Self::NoOp => f.write_str("NoOp"),
        }
    }
}

/// Visibility rule for an item. No condition means always visible.
#[derive(Clone, Copy, Default)]
pub struct Predicate<'a> {
    pub condition: Option<Condition<'a>>,
    pub invert: bool,
}

impl<'a> Predicate<'a> {
    pub const ALWAYS: Self = Self {
        condition: None,
        invert: false,
    };

    pub fn is_visible(&self) -> bool {
        match self.condition {
            None => true,
            Some(cond) => cond() != self.invert,
        }
    }
}

impl fmt::Debug for Predicate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.condition.is_some(), self.invert) {
            (false, _) => f.write_str("Always"),
            (true, false) => f.write_str("OnlyIf"),
            (true, true) => f.write_str("OnlyIfNot"),
        }
    }
}

/// Show the item only while `cond` returns true.
pub const fn only_if(cond: Condition<'_>) -> Predicate<'_> {
    Predicate {
        condition: Some(cond),
        invert: false,
    }
}

/// Show the item only while `cond` returns false.
pub const fn only_if_not(cond: Condition<'_>) -> Predicate<'_> {
    Predicate {
        condition: Some(cond),
        invert: true,
    }
}
