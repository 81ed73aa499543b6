//! dial-menu: the menu engine.
//!
//! Menus are immutable, borrowed data: a title, a layout (icon grid or
//! scrolling list), lifecycle hooks, and a slice of items. `MenuEngine` keeps
//! the navigation stack, turns encoder events into cursor moves, submenu
//! entry, callbacks, or value edits, and paints through `DisplayDriver`.

// Re-exports from dial-types (foundation types and traits).
pub use dial_types::backend;
pub use dial_types::color;
pub use dial_types::config;
pub use dial_types::error;
pub use dial_types::font;
pub use dial_types::geometry;
pub use dial_types::icon;
pub use dial_types::input;

pub mod context;
pub mod editable;
pub mod engine;
pub mod model;
pub mod render;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_utils;

pub use context::DrawContext;
pub use editable::{Editable, EditableBool, EditableNumber, Numeric, Slot};
pub use engine::{EngineState, Frame, MAX_MENU_DEPTH, MenuEngine};
pub use model::{
    Action, Callback, Condition, IconLayout, IconOptions, Layout, Menu, MenuHooks, MenuIcons,
    MenuItem, Predicate, only_if, only_if_not,
};
pub use render::MAX_LIST_ROWS;
pub use theme::MenuTheme;
