//! Navigation stack and input dispatch.
//!
//! `MenuEngine` owns a bounded stack of frames. The top frame is the menu on
//! screen. Each poll tick the caller hands one `InputEvent` to `control`,
//! which moves the cursor, scrolls, fires the selected item's action, or
//! steps the value being edited, then repaints only what changed.

use crate::backend::DisplayDriver;
use crate::context::DrawContext;
use crate::editable::Editable;
use crate::error::Result;
use crate::input::{Direction, InputEvent};
use crate::model::{Action, Layout, Menu, MenuItem};
use crate::render::{self, MAX_LIST_ROWS};
use crate::theme::MenuTheme;

/// Deepest menu nesting the engine will follow.
pub const MAX_MENU_DEPTH: usize = 8;

/// One level of the navigation stack.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub menu: &'a Menu<'a>,
    /// Index of the first on-screen item among the visible items.
    pub scroll: usize,
    /// Position of the selection inside the on-screen window.
    pub cursor: usize,
}

impl<'a> Frame<'a> {
    fn new(menu: &'a Menu<'a>) -> Self {
        Self {
            menu,
            scroll: 0,
            cursor: 0,
        }
    }

    /// Index of the selected item among the visible items.
    pub fn selection(&self) -> usize {
        self.scroll + self.cursor
    }

    /// How many visible items fit on screen at once.
    fn window(&self, visible: usize) -> usize {
        match self.menu.layout {
            Layout::List => MAX_LIST_ROWS,
            Layout::Icons(_) => visible,
        }
    }

    /// Pull scroll and cursor back inside the current visible set. Returns
    /// true if anything moved.
    fn clamp(&mut self) -> bool {
        let visible = self.menu.visible_count();
        let window = self.window(visible);
        let scroll = self.scroll.min(visible.saturating_sub(window));
        let on_screen = (visible - scroll).min(window);
        let cursor = self.cursor.min(on_screen.saturating_sub(1));
        let moved = (scroll, cursor) != (self.scroll, self.cursor);
        if moved {
            log::debug!(
                "Visible items changed: scroll {} -> {scroll}, cursor {} -> {cursor}",
                self.scroll, self.cursor
            );
        }
        self.scroll = scroll;
        self.cursor = cursor;
        moved
    }

    /// Put the selection on visible item `index`, scrolling as little as
    /// possible. Returns true if anything moved.
    fn select(&mut self, index: usize) -> bool {
        let window = self.window(self.menu.visible_count()).max(1);
        let scroll = if index < self.scroll {
            index
        } else if index >= self.scroll + window {
            index + 1 - window
        } else {
            self.scroll
        };
        let cursor = index - scroll;
        let moved = (scroll, cursor) != (self.scroll, self.cursor);
        self.scroll = scroll;
        self.cursor = cursor;
        moved
    }
}

/// Coarse engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No menu shown.
    Idle,
    Navigating,
    /// Encoder turns step the selected value.
    Editing,
}

/// What a navigation step needs repainted.
enum Repaint {
    Nothing,
    /// Cursor moved within the window; carries the old cursor position.
    Cursor(usize),
    Full,
}

/// The menu engine.
pub struct MenuEngine<'a> {
    stack: Vec<Frame<'a>>,
    editing: Option<&'a dyn Editable>,
    theme: MenuTheme,
}

impl Default for MenuEngine<'_> {
    fn default() -> Self {
        Self::new(MenuTheme::default())
    }
}

impl<'a> MenuEngine<'a> {
    pub fn new(theme: MenuTheme) -> Self {
        Self {
            stack: Vec::with_capacity(MAX_MENU_DEPTH),
            editing: None,
            theme,
        }
    }

    // -- Accessors --

    pub fn state(&self) -> EngineState {
        match (self.stack.is_empty(), self.editing.is_some()) {
            (true, _) => EngineState::Idle,
            (false, false) => EngineState::Navigating,
            (false, true) => EngineState::Editing,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current_frame(&self) -> Option<&Frame<'a>> {
        self.stack.last()
    }

    pub fn current_menu(&self) -> Option<&'a Menu<'a>> {
        self.stack.last().map(|frame| frame.menu)
    }

    /// The item under the cursor, judged against the predicates right now.
    pub fn selected_item(&self) -> Option<&'a MenuItem<'a>> {
        let frame = self.stack.last()?;
        frame.menu.visible_item(frame.selection())
    }

    pub fn theme(&self) -> &MenuTheme {
        &self.theme
    }

    // -- Navigation --

    /// Push `menu` and show it. Its on-enter hook runs first. Does nothing
    /// when the stack is already `MAX_MENU_DEPTH` deep.
    pub fn enter_menu(
        &mut self,
        display: &mut dyn DisplayDriver,
        menu: &'a Menu<'a>,
    ) -> Result<()> {
        if self.stack.len() >= MAX_MENU_DEPTH {
            log::debug!(
                "Menu stack full ({MAX_MENU_DEPTH}), ignoring enter of {:?}",
                menu.title
            );
            return Ok(());
        }
        self.finish_edit();
        if let Some(on_enter) = menu.hooks.on_enter {
            on_enter();
        }
        self.stack.push(Frame::new(menu));
        log::debug!("Entered menu {:?} (depth {})", menu.title, self.stack.len());
        self.redraw(display)
    }

    /// Pop the current menu and show its parent (or a blank screen). Its
    /// on-leave hook runs first. Does nothing when no menu is shown.
    pub fn leave_menu(&mut self, display: &mut dyn DisplayDriver) -> Result<()> {
        let Some(frame) = self.stack.last().copied() else {
            log::debug!("Menu stack empty, ignoring leave");
            return Ok(());
        };
        self.finish_edit();
        if let Some(on_leave) = frame.menu.hooks.on_leave {
            on_leave();
        }
        self.stack.pop();
        log::debug!("Left menu {:?} (depth {})", frame.menu.title, self.stack.len());
        self.redraw(display)
    }

    /// Handle one input event.
    pub fn control(&mut self, display: &mut dyn DisplayDriver, event: InputEvent) -> Result<()> {
        let Some(frame) = self.stack.last_mut() else {
            return Ok(());
        };
        let clamped = frame.clamp();
        if self.follow_edit() || clamped {
            self.redraw(display)?;
        }
        match self.editing {
            Some(editable) => self.control_edit(display, editable, event),
            None => self.control_navigate(display, event),
        }
    }

    /// Repaint the whole screen from the top frame.
    pub fn redraw(&mut self, display: &mut dyn DisplayDriver) -> Result<()> {
        if let Some(frame) = self.stack.last_mut() {
            frame.clamp();
        }
        self.follow_edit();
        let mut ctx = DrawContext::new(display, &self.theme);
        ctx.clear()?;
        if let Some(frame) = self.stack.last() {
            if let Some(title) = frame.menu.title {
                render::draw_title(&mut ctx, title)?;
            }
            match frame.menu.layout {
                Layout::List => {
                    let rows = render::draw_list_menu(&mut ctx, frame.menu, frame.scroll)?;
                    if rows > 0 {
                        render::draw_list_cursor(&mut ctx, frame.cursor, true)?;
                    }
                    if let Some(editable) = self.editing {
                        render::draw_list_value(&mut ctx, editable, frame.cursor, true)?;
                    }
                    log::trace!("Drew {rows} list rows from {}", frame.scroll);
                }
                Layout::Icons(layout) => {
                    let cells =
                        render::draw_icon_menu(&mut ctx, &layout, frame.menu, frame.cursor)?;
                    log::trace!("Drew {cells} icon cells");
                }
            }
        }
        ctx.display.flush()
    }

    // -- Dispatch --

    fn control_navigate(
        &mut self,
        display: &mut dyn DisplayDriver,
        event: InputEvent,
    ) -> Result<()> {
        let repaint = match event {
            InputEvent::None => return Ok(()),
            InputEvent::Decrement => self.move_back(),
            InputEvent::Increment => self.move_forward(),
            InputEvent::Confirm => return self.confirm(display),
        };
        match repaint {
            Repaint::Nothing => Ok(()),
            Repaint::Cursor(old) => self.redraw_cursor(display, old),
            Repaint::Full => self.redraw(display),
        }
    }

    fn control_edit(
        &mut self,
        display: &mut dyn DisplayDriver,
        editable: &'a dyn Editable,
        event: InputEvent,
    ) -> Result<()> {
        match event {
            InputEvent::None => Ok(()),
            InputEvent::Decrement => {
                editable.step(Direction::Decrease);
                self.redraw_value(display, editable, true)
            }
            InputEvent::Increment => {
                editable.step(Direction::Increase);
                self.redraw_value(display, editable, true)
            }
            InputEvent::Confirm => {
                editable.done();
                self.editing = None;
                log::debug!("Edit finished");
                self.redraw_value(display, editable, false)
            }
        }
    }

    fn move_back(&mut self) -> Repaint {
        let Some(frame) = self.stack.last_mut() else {
            return Repaint::Nothing;
        };
        let repaint = if frame.cursor > 0 {
            frame.cursor -= 1;
            Repaint::Cursor(frame.cursor + 1)
        } else if frame.scroll > 0 {
            frame.scroll -= 1;
            Repaint::Full
        } else {
            Repaint::Nothing
        };
        log::trace!("Cursor {} scroll {}", frame.cursor, frame.scroll);
        repaint
    }

    fn move_forward(&mut self) -> Repaint {
        let Some(frame) = self.stack.last_mut() else {
            return Repaint::Nothing;
        };
        let visible = frame.menu.visible_count();
        let on_screen = visible
            .saturating_sub(frame.scroll)
            .min(frame.window(visible));
        let repaint = if frame.cursor + 1 < on_screen {
            frame.cursor += 1;
            Repaint::Cursor(frame.cursor - 1)
        } else if frame.scroll + on_screen < visible {
            frame.scroll += 1;
            Repaint::Full
        } else {
            Repaint::Nothing
        };
        log::trace!("Cursor {} scroll {}", frame.cursor, frame.scroll);
        repaint
    }

    fn confirm(&mut self, display: &mut dyn DisplayDriver) -> Result<()> {
        let Some(item) = self.selected_item() else {
            return Ok(());
        };
        match item.action {
            Action::EnterSubmenu(menu) => self.enter_menu(display, menu),
            Action::LeaveMenu => self.leave_menu(display),
            Action::Invoke(callback) => {
                callback();
                Ok(())
            }
            Action::EditValue(editable) => {
                if editable.enter() {
                    self.editing = Some(editable);
                    log::debug!("Editing {:?}", item.label);
                    self.redraw_value(display, editable, true)
                } else {
                    self.redraw_value(display, editable, false)
                }
            }
            Action::NoOp => Ok(()),
        }
    }

    /// End the edit sub-mode, if active, before the stack changes.
    fn finish_edit(&mut self) {
        if let Some(editable) = self.editing.take() {
            editable.done();
            log::debug!("Edit finished by navigation");
        }
    }

    /// Keep the selection on the item being edited after the visible set
    /// changed. An edited item that is no longer visible ends the edit.
    /// Returns true if the screen needs a full repaint.
    fn follow_edit(&mut self) -> bool {
        let Some(editable) = self.editing else {
            return false;
        };
        let Some(frame) = self.stack.last_mut() else {
            return false;
        };
        let menu = frame.menu;
        let found = menu.visible_items().position(|item| item.edits(editable));
        match found {
            Some(index) => frame.select(index),
            None => {
                editable.done();
                self.editing = None;
                log::debug!("Edited item hidden, edit finished");
                true
            }
        }
    }

    // -- Partial repaints --

    fn redraw_cursor(&mut self, display: &mut dyn DisplayDriver, old: usize) -> Result<()> {
        let Some(frame) = self.stack.last().copied() else {
            return Ok(());
        };
        let mut ctx = DrawContext::new(display, &self.theme);
        match frame.menu.layout {
            Layout::List => {
                render::draw_list_cursor(&mut ctx, old, false)?;
                render::draw_list_cursor(&mut ctx, frame.cursor, true)?;
            }
            Layout::Icons(layout) => {
                let old_index = frame.scroll + old;
                if let Some(item) = frame.menu.visible_item(old_index) {
                    render::draw_icon_item(&mut ctx, &layout, item, old_index, false)?;
                }
                let new_index = frame.selection();
                if let Some(item) = frame.menu.visible_item(new_index) {
                    render::draw_icon_item(&mut ctx, &layout, item, new_index, true)?;
                }
            }
        }
        ctx.display.flush()
    }

    /// Repaint the selected row's value. Icon grids have no value area.
    fn redraw_value(
        &mut self,
        display: &mut dyn DisplayDriver,
        editable: &dyn Editable,
        highlighted: bool,
    ) -> Result<()> {
        let Some(frame) = self.stack.last().copied() else {
            return Ok(());
        };
        if frame.menu.layout != Layout::List {
            return Ok(());
        }
        let mut ctx = DrawContext::new(display, &self.theme);
        render::draw_list_value(&mut ctx, editable, frame.cursor, highlighted)?;
        ctx.display.flush()
    }
}
