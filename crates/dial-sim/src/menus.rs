//! The demo printer menu tree and the poll loop that drives it.
//!
//! Menus borrow the callbacks and editables defined alongside them, so the
//! whole tree is built as locals in `run` and lives exactly as long as the
//! loop.

use std::io::BufRead;

use dial_menu::{
    Action, EditableBool, EditableNumber, IconLayout, Menu, MenuEngine, MenuHooks, MenuIcons,
    MenuItem, MenuTheme, only_if, only_if_not,
};
use dial_types::backend::DisplayDriver;
use dial_types::error::Result;
use dial_types::geometry::{Dimensions, Grid, Point};
use dial_types::icon::Icon;
use dial_types::input::InputSource;

use crate::input::LineInput;
use crate::settings::{Settings, report};

/// Two-column main grid with the logo above it.
const MAIN_GRID: IconLayout = IconLayout::new(
    Dimensions::new(109, 99),
    Grid::new(Point::new(17, 130), Dimensions::new(128, 116)),
    2,
)
.with_logo();

/// Single row of three cells on the print screen.
const PRINT_GRID: IconLayout = IconLayout::new(
    Dimensions::new(79, 99),
    Grid::new(Point::new(8, 252), Dimensions::new(88, 0)),
    3,
);

const VERSION_LABEL: &str = concat!("Dial ", env!("CARGO_PKG_VERSION"));

/// Build the menu tree and run it until `input` closes.
pub fn run<R: BufRead>(
    settings: &Settings,
    theme: MenuTheme,
    display: &mut dyn DisplayDriver,
    input: &mut LineInput<R>,
) -> Result<()> {
    // -- Callbacks --
    let is_printing = || settings.printing.get();
    let home = || settings.home();
    let preheat = || settings.preheat();
    let cooldown = || settings.cooldown();
    let start_print = || settings.start_print();
    let toggle_pause = || settings.toggle_pause();
    let stop_print = || settings.stop_print();
    let begin_leveling = || settings.begin_leveling();
    let end_leveling = || settings.end_leveling();
    let save = || report("Save settings", settings.save());
    let restore = || report("Restore settings", settings.restore());
    let reset = || settings.reset();

    // -- Editables --
    let hotend_target = EditableNumber::new(&settings.hotend_target, 0, 260, 1);
    let bed_target = EditableNumber::new(&settings.bed_target, 0, 110, 1);
    let fan_speed = EditableNumber::new(&settings.fan_speed, 0, 255, 5);
    let z_offset = EditableNumber::new(&settings.z_offset, -2.0, 2.0, 0.01);
    let move_x = EditableNumber::new(&settings.pos_x, 0.0, 235.0, 0.1);
    let move_y = EditableNumber::new(&settings.pos_y, 0.0, 235.0, 0.1);
    let move_z = EditableNumber::new(&settings.pos_z, 0.0, 250.0, 0.1);
    let extruder = EditableNumber::new(&settings.extruder, -500.0, 500.0, 0.1);
    let preheat_hotend = EditableNumber::new(&settings.preheat_hotend, 0, 260, 5);
    let preheat_bed = EditableNumber::new(&settings.preheat_bed, 0, 110, 5);
    let beeper = EditableBool::new(&settings.beeper);

    // -- Leaf menus --
    let tune_items = [
        MenuItem::back(),
        MenuItem::new(Icon::HOTEND_TEMP.into(), "Hotend", Action::EditValue(&hotend_target)),
        MenuItem::new(Icon::BED_TEMP.into(), "Bed", Action::EditValue(&bed_target)),
        MenuItem::new(Icon::FAN_SPEED.into(), "Fan", Action::EditValue(&fan_speed)),
        MenuItem::new(Icon::Z_OFFSET.into(), "Z-Offset", Action::EditValue(&z_offset)),
    ];
    let tune_menu = Menu::list("Tune", &tune_items);

    let move_items = [
        MenuItem::back(),
        MenuItem::new(Icon::MOVE_X.into(), "Move X", Action::EditValue(&move_x)),
        MenuItem::new(Icon::MOVE_Y.into(), "Move Y", Action::EditValue(&move_y)),
        MenuItem::new(Icon::MOVE_Z.into(), "Move Z", Action::EditValue(&move_z)),
        MenuItem::new(Icon::EXTRUDER.into(), "Extruder", Action::EditValue(&extruder)),
    ];
    let move_menu = Menu::list("Move", &move_items);

    let leveling_items = [
        MenuItem::back(),
        MenuItem::new(Icon::HOMING.into(), "Home", Action::Invoke(&home)),
        MenuItem::new(Icon::Z_OFFSET.into(), "Z-Offset", Action::EditValue(&z_offset)),
    ];
    let leveling_menu = Menu::list("Manual Leveling", &leveling_items)
        .with_hooks(MenuHooks::new(&begin_leveling, &end_leveling));

    let temperature_items = [
        MenuItem::back(),
        MenuItem::new(Icon::SET_END_TEMP.into(), "Preheat Hotend", Action::EditValue(&preheat_hotend)),
        MenuItem::new(Icon::SET_BED_TEMP.into(), "Preheat Bed", Action::EditValue(&preheat_bed)),
        MenuItem::new(Icon::FAN_SPEED.into(), "Fan Speed", Action::EditValue(&fan_speed)),
    ];
    let temperature_menu = Menu::list("Temperature", &temperature_items);

    let info_items = [
        MenuItem::back(),
        MenuItem::new(Icon::VERSION.into(), VERSION_LABEL, Action::NoOp),
        MenuItem::new(Icon::PRINT_SIZE.into(), "235x235x250", Action::NoOp),
    ];
    let info_menu = Menu::list("Info", &info_items);

    // -- Branches --
    let print_items = [
        MenuItem::new(
            MenuIcons::pair(Icon::SETUP_0, Icon::SETUP_1),
            "Tune",
            Action::EnterSubmenu(&tune_menu),
        ),
        MenuItem::new(
            MenuIcons::pair(Icon::PAUSE_0, Icon::PAUSE_1),
            "Pause",
            Action::Invoke(&toggle_pause),
        )
        .with_predicate(only_if(&is_printing)),
        MenuItem::new(
            MenuIcons::pair(Icon::CONTINUE_0, Icon::CONTINUE_1),
            "Print",
            Action::Invoke(&start_print),
        )
        .with_predicate(only_if_not(&is_printing)),
        MenuItem::new(
            MenuIcons::pair(Icon::STOP_0, Icon::STOP_1),
            "Stop",
            Action::Invoke(&stop_print),
        )
        .with_predicate(only_if(&is_printing)),
        MenuItem::back().with_predicate(only_if_not(&is_printing)),
    ];
    let print_menu = Menu::icons("Print", PRINT_GRID, &print_items).without_title();

    let prepare_items = [
        MenuItem::back(),
        MenuItem::new(Icon::AXIS.into(), "Move", Action::EnterSubmenu(&move_menu)),
        MenuItem::new(Icon::HOMING.into(), "Homing", Action::Invoke(&home)),
        MenuItem::new(
            Icon::PRINT_SIZE.into(),
            "Manual Leveling",
            Action::EnterSubmenu(&leveling_menu),
        ),
        MenuItem::new(Icon::TEMPERATURE.into(), "Preheat", Action::Invoke(&preheat)),
        MenuItem::new(Icon::COOL.into(), "Cooldown", Action::Invoke(&cooldown)),
    ];
    let prepare_menu = Menu::list("Prepare", &prepare_items);

    let control_items = [
        MenuItem::back(),
        MenuItem::new(
            Icon::TEMPERATURE.into(),
            "Temperature",
            Action::EnterSubmenu(&temperature_menu),
        ),
        MenuItem::new(Icon::MOTION.into(), "Beeper", Action::EditValue(&beeper)),
        MenuItem::new(Icon::WRITE_EEPROM.into(), "Save Settings", Action::Invoke(&save)),
        MenuItem::new(Icon::READ_EEPROM.into(), "Restore Settings", Action::Invoke(&restore)),
        MenuItem::new(Icon::RESUME_EEPROM.into(), "Reset Settings", Action::Invoke(&reset)),
    ];
    let control_menu = Menu::list("Control", &control_items);

    let main_items = [
        MenuItem::new(
            MenuIcons::pair(Icon::PRINT_0, Icon::PRINT_1),
            "Print",
            Action::EnterSubmenu(&print_menu),
        ),
        MenuItem::new(
            MenuIcons::pair(Icon::PREPARE_0, Icon::PREPARE_1),
            "Prepare",
            Action::EnterSubmenu(&prepare_menu),
        ),
        MenuItem::new(
            MenuIcons::pair(Icon::CONTROL_0, Icon::CONTROL_1),
            "Control",
            Action::EnterSubmenu(&control_menu),
        ),
        MenuItem::new(
            MenuIcons::pair(Icon::INFO_0, Icon::INFO_1),
            "Info",
            Action::EnterSubmenu(&info_menu),
        ),
    ];
    let main_menu = Menu::icons("Main Menu", MAIN_GRID, &main_items);

    // -- Poll loop --
    let mut engine = MenuEngine::new(theme);
    engine.enter_menu(display, &main_menu)?;
    loop {
        let event = input.poll();
        if input.is_closed() {
            break;
        }
        engine.control(display, event)?;
        if settings.take_dirty() {
            engine.redraw(display)?;
        }
    }
    log::info!("Input closed at menu depth {}", engine.depth());
    Ok(())
}
