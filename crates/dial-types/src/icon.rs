//! Icon slots in the display controller's icon library.
//!
//! Icons are stored on the controller itself; the firmware only refers to
//! them by slot number. "No icon" is `Option::<Icon>::None`, never a slot.

/// A slot in the controller's icon library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon(pub u8);

impl Icon {
    pub const LOGO: Self = Self(0);
    pub const PRINT_0: Self = Self(1);
    pub const PRINT_1: Self = Self(2);
    pub const PREPARE_0: Self = Self(3);
    pub const PREPARE_1: Self = Self(4);
    pub const CONTROL_0: Self = Self(5);
    pub const CONTROL_1: Self = Self(6);
    pub const LEVELING_0: Self = Self(7);
    pub const LEVELING_1: Self = Self(8);
    pub const HOTEND_TEMP: Self = Self(9);
    pub const BED_TEMP: Self = Self(10);
    pub const SPEED: Self = Self(11);
    pub const Z_OFFSET: Self = Self(12);
    pub const BACK: Self = Self(13);
    pub const FILE: Self = Self(14);
    pub const SETUP_0: Self = Self(17);
    pub const SETUP_1: Self = Self(18);
    pub const PAUSE_0: Self = Self(19);
    pub const PAUSE_1: Self = Self(20);
    pub const CONTINUE_0: Self = Self(21);
    pub const CONTINUE_1: Self = Self(22);
    pub const STOP_0: Self = Self(23);
    pub const STOP_1: Self = Self(24);
    pub const MORE: Self = Self(26);
    pub const AXIS: Self = Self(27);
    pub const CLOSE_MOTOR: Self = Self(28);
    pub const HOMING: Self = Self(29);
    pub const SET_HOME: Self = Self(30);
    pub const COOL: Self = Self(33);
    pub const MOVE_X: Self = Self(35);
    pub const MOVE_Y: Self = Self(36);
    pub const MOVE_Z: Self = Self(37);
    pub const EXTRUDER: Self = Self(38);
    pub const TEMPERATURE: Self = Self(40);
    pub const MOTION: Self = Self(41);
    pub const WRITE_EEPROM: Self = Self(42);
    pub const READ_EEPROM: Self = Self(43);
    pub const RESUME_EEPROM: Self = Self(44);
    pub const INFO: Self = Self(45);
    pub const SET_END_TEMP: Self = Self(46);
    pub const SET_BED_TEMP: Self = Self(47);
    pub const FAN_SPEED: Self = Self(48);
    pub const PRINT_SIZE: Self = Self(55);
    pub const VERSION: Self = Self(56);
    pub const INFO_0: Self = Self(90);
    pub const INFO_1: Self = Self(91);
}
