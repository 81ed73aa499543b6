//! Menu renderers.
//!
//! Stateless drawing routines for titles, icon grids, and list rows. The
//! engine decides what to repaint; these only know where things go.

use crate::context::DrawContext;
use crate::editable::Editable;
use crate::error::Result;
use crate::geometry::Point;
use crate::icon::Icon;
use crate::model::{Action, IconLayout, IconOptions, Menu, MenuItem};

/// Rows a list menu shows at once.
pub const MAX_LIST_ROWS: usize = 4;

/// Title band with the title centered in it.
pub fn draw_title(ctx: &mut DrawContext<'_>, title: &str) -> Result<()> {
    ctx.title_bar(title)
}

/// Draw every visible item of an icon-grid menu. Returns the number of cells
/// drawn.
pub fn draw_icon_menu(
    ctx: &mut DrawContext<'_>,
    layout: &IconLayout,
    menu: &Menu<'_>,
    cursor: usize,
) -> Result<usize> {
    if layout.options == IconOptions::WithLogo {
        ctx.display.show_icon(Icon::LOGO, ctx.theme.logo_pos)?;
    }
    let mut count = 0;
    for (index, item) in menu.visible_items().enumerate() {
        draw_icon_item(ctx, layout, item, index, index == cursor)?;
        count += 1;
    }
    Ok(count)
}

/// Draw one grid cell. The outline is always drawn, in the background color
/// when not selected, so repainting a cell clears an old highlight.
pub fn draw_icon_item(
    ctx: &mut DrawContext<'_>,
    layout: &IconLayout,
    item: &MenuItem<'_>,
    index: usize,
    selected: bool,
) -> Result<()> {
    let theme = ctx.theme;
    let pos = layout.cell_origin(index);
    let rect = layout.size.at_point(pos);
    ctx.display.show_icon(item.icons.for_state(selected), pos)?;
    let outline = if selected {
        theme.highlight
    } else {
        theme.background
    };
    ctx.outline(outline, rect)?;
    let band = rect.bottom(theme.icon_text_height);
    ctx.label_centered(item.label, band, theme.item_text, theme.item_bg)
}

/// Draw up to `MAX_LIST_ROWS` visible items starting at `scroll`. Returns the
/// number of rows drawn.
pub fn draw_list_menu(ctx: &mut DrawContext<'_>, menu: &Menu<'_>, scroll: usize) -> Result<usize> {
    let mut count = 0;
    for (row, item) in menu
        .visible_items()
        .skip(scroll)
        .take(MAX_LIST_ROWS)
        .enumerate()
    {
        draw_list_item(ctx, item, row)?;
        count += 1;
    }
    Ok(count)
}

fn draw_list_item(ctx: &mut DrawContext<'_>, item: &MenuItem<'_>, row: usize) -> Result<()> {
    let theme = ctx.theme;
    let icon_pos = theme.list_icon_pos(row);
    ctx.display.show_icon(item.icons.normal, icon_pos)?;
    ctx.label(item.label, theme.list_label_pos(row))?;
    match item.action {
        Action::EnterSubmenu(_) => {
            ctx.display
                .show_icon(Icon::MORE, Point::new(theme.list_more_x, icon_pos.y))?;
        }
        Action::EditValue(editable) => {
            editable.draw(ctx, theme.list_value_anchor(row), false)?;
        }
        Action::LeaveMenu | Action::Invoke(_) | Action::NoOp => {}
    }
    ctx.separator(theme.list_separator_y(row))
}

/// Draw or erase the cursor bar on `row`. Row content is left alone.
pub fn draw_list_cursor(ctx: &mut DrawContext<'_>, row: usize, visible: bool) -> Result<()> {
    let color = if visible {
        ctx.theme.cursor
    } else {
        ctx.theme.background
    };
    let rect = ctx.theme.list_cursor_rect(row);
    ctx.display.fill_rect(color, rect)
}

/// Repaint only the value of the editable on `row`.
pub fn draw_list_value(
    ctx: &mut DrawContext<'_>,
    editable: &dyn Editable,
    row: usize,
    highlighted: bool,
) -> Result<()> {
    let anchor = ctx.theme.list_value_anchor(row);
    editable.draw(ctx, anchor, highlighted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RectMode;
    use crate::editable::EditableNumber;
    use crate::geometry::{Dimensions, Grid, Rectangle};
    use crate::model::{MenuIcons, only_if};
    use crate::test_utils::MockDisplay;
    use crate::theme::MenuTheme;
    use std::cell::Cell;

    fn grid_layout() -> IconLayout {
        IconLayout::new(
            Dimensions::new(109, 99),
            Grid::new(Point::new(17, 130), Dimensions::new(128, 120)),
            2,
        )
    }

    fn item(icon: Icon, label: &str) -> MenuItem<'_> {
        MenuItem::new(MenuIcons::single(icon), label, Action::NoOp)
    }

    #[test]
    fn icon_cell_label_is_centered_in_band() {
        let theme = MenuTheme::default();
        let mut display = MockDisplay::new();
        let mut ctx = DrawContext::new(&mut display, &theme);
        let print = item(Icon::PRINT_0, "Print");
        draw_icon_item(&mut ctx, &grid_layout(), &print, 0, false).unwrap();

        // Cell (17,130)-(126,229), band is its bottom 40 px.
        assert_eq!(display.strings(), vec![("Print", Point::new(51, 201))]);
        assert_eq!(display.icons(), vec![(Icon::PRINT_0, Point::new(17, 130))]);
        assert_eq!(
            display.rects(RectMode::Outline, theme.background),
            vec![Rectangle::new(Point::new(17, 130), Point::new(126, 229))]
        );
    }

    #[test]
    fn selected_cell_swaps_icon_and_outlines() {
        let theme = MenuTheme::default();
        let mut display = MockDisplay::new();
        let mut ctx = DrawContext::new(&mut display, &theme);
        let print = MenuItem::new(
            MenuIcons::pair(Icon::PRINT_0, Icon::PRINT_1),
            "Print",
            Action::NoOp,
        );
        draw_icon_item(&mut ctx, &grid_layout(), &print, 1, true).unwrap();
        assert_eq!(display.icons(), vec![(Icon::PRINT_1, Point::new(145, 130))]);
        assert_eq!(display.rects(RectMode::Outline, theme.highlight).len(), 1);
    }

    #[test]
    fn icon_menu_skips_hidden_items_and_draws_logo() {
        let theme = MenuTheme::default();
        let mut display = MockDisplay::new();
        let mut ctx = DrawContext::new(&mut display, &theme);
        let never = || false;
        let items = [
            item(Icon::PRINT_0, "Print"),
            item(Icon::STOP_0, "Stop").with_predicate(only_if(&never)),
            item(Icon::PREPARE_0, "Prepare"),
        ];
        let menu = Menu::icons("Main", grid_layout().with_logo(), &items);
        let count = draw_icon_menu(&mut ctx, &grid_layout().with_logo(), &menu, 1).unwrap();

        assert_eq!(count, 2);
        assert_eq!(display.texts(), vec!["Print", "Prepare"]);
        assert_eq!(
            display.icons(),
            vec![
                (Icon::LOGO, theme.logo_pos),
                (Icon::PRINT_0, Point::new(17, 130)),
                // Hidden item takes no cell.
                (Icon::PREPARE_0, Point::new(145, 130)),
            ]
        );
    }

    #[test]
    fn list_menu_draws_at_most_four_rows() {
        let theme = MenuTheme::default();
        let mut display = MockDisplay::new();
        let mut ctx = DrawContext::new(&mut display, &theme);
        let items = [
            item(Icon::MOVE_X, "A"),
            item(Icon::MOVE_Y, "B"),
            item(Icon::MOVE_Z, "C"),
            item(Icon::EXTRUDER, "D"),
            item(Icon::HOMING, "E"),
            item(Icon::COOL, "F"),
        ];
        let menu = Menu::list("List", &items);

        assert_eq!(draw_list_menu(&mut ctx, &menu, 0).unwrap(), 4);
        assert_eq!(display.texts(), vec!["A", "B", "C", "D"]);

        display.reset();
        let mut ctx = DrawContext::new(&mut display, &theme);
        assert_eq!(draw_list_menu(&mut ctx, &menu, 2).unwrap(), 4);
        assert_eq!(display.texts(), vec!["C", "D", "E", "F"]);
        // Sixth item sits on the bottom row.
        assert_eq!(display.strings()[3].1, theme.list_label_pos(3));
    }

    #[test]
    fn list_row_shows_more_indicator_and_value() {
        let theme = MenuTheme::default();
        let mut display = MockDisplay::new();
        let mut ctx = DrawContext::new(&mut display, &theme);
        let temp = Cell::new(200u16);
        let edit = EditableNumber::new(&temp, 0, 260, 1);
        let sub_items = [MenuItem::back()];
        let sub = Menu::list("Sub", &sub_items);
        let items = [
            MenuItem::new(Icon::AXIS.into(), "Move", Action::EnterSubmenu(&sub)),
            MenuItem::new(Icon::HOTEND_TEMP.into(), "Hotend", Action::EditValue(&edit)),
        ];
        let menu = Menu::list("Prepare", &items);
        draw_list_menu(&mut ctx, &menu, 0).unwrap();

        assert!(
            display
                .icons()
                .contains(&(Icon::MORE, Point::new(theme.list_more_x, theme.list_icon_pos(0).y)))
        );
        assert_eq!(display.numbers(), vec![200]);
        // One separator per row.
        let lines = display
            .calls
            .iter()
            .filter(|c| matches!(c, crate::test_utils::DrawCall::Line { .. }))
            .count();
        assert_eq!(lines, 2);
    }

    #[test]
    fn cursor_draw_and_erase_use_cursor_and_background() {
        let theme = MenuTheme::default();
        let mut display = MockDisplay::new();
        let mut ctx = DrawContext::new(&mut display, &theme);
        draw_list_cursor(&mut ctx, 2, true).unwrap();
        draw_list_cursor(&mut ctx, 1, false).unwrap();
        assert_eq!(
            display.rects(RectMode::Fill, theme.cursor),
            vec![theme.list_cursor_rect(2)]
        );
        assert_eq!(
            display.rects(RectMode::Fill, theme.background),
            vec![theme.list_cursor_rect(1)]
        );
        assert!(display.strings().is_empty());
    }
}
