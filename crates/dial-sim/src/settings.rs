//! Simulated printer state and persisted settings.
//!
//! `Settings` holds the live values menus edit. `Persisted` is the subset
//! written to disk by the Save/Restore/Reset items.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dial_types::error::{DialError, Result};

/// Values saved to the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Persisted {
    pub preheat_hotend: u16,
    pub preheat_bed: u16,
    pub fan_speed: u8,
    pub z_offset: f32,
    pub beeper: bool,
}

impl Default for Persisted {
    fn default() -> Self {
        Self {
            preheat_hotend: 200,
            preheat_bed: 60,
            fan_speed: 255,
            z_offset: 0.0,
            beeper: true,
        }
    }
}

/// Live machine state.
pub struct Settings {
    path: PathBuf,

    // -- Persisted --
    pub preheat_hotend: Cell<u16>,
    pub preheat_bed: Cell<u16>,
    pub fan_speed: Cell<u8>,
    pub z_offset: Cell<f32>,
    pub beeper: Cell<bool>,

    // -- Runtime only --
    pub hotend_target: Cell<u16>,
    pub bed_target: Cell<u16>,
    pub pos_x: Cell<f32>,
    pub pos_y: Cell<f32>,
    pub pos_z: Cell<f32>,
    pub extruder: Cell<f32>,
    pub printing: Cell<bool>,
    pub paused: Cell<bool>,
    pub leveling: Cell<bool>,
    /// Set when an action changed which items are visible.
    dirty: Cell<bool>,
}

impl Settings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let defaults = Persisted::default();
        let settings = Self {
            path: path.into(),
            preheat_hotend: Cell::new(0),
            preheat_bed: Cell::new(0),
            fan_speed: Cell::new(0),
            z_offset: Cell::new(0.0),
            beeper: Cell::new(false),
            hotend_target: Cell::new(0),
            bed_target: Cell::new(0),
            pos_x: Cell::new(0.0),
            pos_y: Cell::new(0.0),
            pos_z: Cell::new(0.0),
            // Unknown until the axis is homed.
            extruder: Cell::new(f32::NAN),
            printing: Cell::new(false),
            paused: Cell::new(false),
            leveling: Cell::new(false),
            dirty: Cell::new(false),
        };
        settings.apply(&defaults);
        settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the screen needs a full repaint, clearing the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn snapshot(&self) -> Persisted {
        Persisted {
            preheat_hotend: self.preheat_hotend.get(),
            preheat_bed: self.preheat_bed.get(),
            fan_speed: self.fan_speed.get(),
            z_offset: self.z_offset.get(),
            beeper: self.beeper.get(),
        }
    }

    pub fn apply(&self, p: &Persisted) {
        self.preheat_hotend.set(p.preheat_hotend);
        self.preheat_bed.set(p.preheat_bed);
        self.fan_speed.set(p.fan_speed);
        self.z_offset.set(p.z_offset);
        self.beeper.set(p.beeper);
    }

    /// Write the persisted subset to the settings file.
    pub fn save(&self) -> Result<()> {
        let text = toml::to_string(&self.snapshot())
            .map_err(|e| DialError::Config(format!("cannot serialize settings: {e}")))?;
        std::fs::write(&self.path, text)?;
        log::info!("Settings saved to {}", self.path.display());
        Ok(())
    }

    /// Load the settings file over the current values.
    pub fn restore(&self) -> Result<()> {
        let text = std::fs::read_to_string(&self.path)?;
        let persisted: Persisted = toml::from_str(&text)?;
        self.apply(&persisted);
        log::info!("Settings restored from {}", self.path.display());
        Ok(())
    }

    /// Back to factory defaults. The file is left alone until the next save.
    pub fn reset(&self) {
        self.apply(&Persisted::default());
        log::info!("Settings reset to defaults");
    }

    // -- Machine actions --

    pub fn home(&self) {
        self.pos_x.set(0.0);
        self.pos_y.set(0.0);
        self.pos_z.set(0.0);
        self.extruder.set(0.0);
        log::info!("Homed all axes");
    }

    pub fn preheat(&self) {
        self.hotend_target.set(self.preheat_hotend.get());
        self.bed_target.set(self.preheat_bed.get());
        log::info!(
            "Preheating: hotend {} C, bed {} C",
            self.preheat_hotend.get(),
            self.preheat_bed.get()
        );
    }

    pub fn cooldown(&self) {
        self.hotend_target.set(0);
        self.bed_target.set(0);
        log::info!("Cooling down");
    }

    pub fn start_print(&self) {
        self.printing.set(true);
        self.paused.set(false);
        self.dirty.set(true);
        log::info!("Print started");
    }

    pub fn toggle_pause(&self) {
        let paused = !self.paused.get();
        self.paused.set(paused);
        self.dirty.set(true);
        log::info!("Print {}", if paused { "paused" } else { "resumed" });
    }

    pub fn stop_print(&self) {
        self.printing.set(false);
        self.paused.set(false);
        self.dirty.set(true);
        log::info!("Print stopped");
    }

    pub fn begin_leveling(&self) {
        self.leveling.set(true);
        log::info!("Leveling: probe deployed");
    }

    pub fn end_leveling(&self) {
        self.leveling.set(false);
        log::info!("Leveling: probe stowed");
    }
}

/// Run a fallible settings operation from a menu callback, logging failure.
pub fn report(what: &str, result: Result<()>) {
    if let Err(e) = result {
        log::error!("{what} failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_settings_start_from_defaults() {
        let s = Settings::new("unused.toml");
        assert_eq!(s.snapshot(), Persisted::default());
        assert!(s.extruder.get().is_nan());
        assert!(!s.printing.get());
    }

    #[test]
    fn save_then_restore_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let s = Settings::new(&path);
        s.preheat_hotend.set(215);
        s.beeper.set(false);
        s.save().unwrap();

        s.reset();
        assert_eq!(s.preheat_hotend.get(), 200);
        s.restore().unwrap();
        assert_eq!(s.preheat_hotend.get(), 215);
        assert!(!s.beeper.get());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "fan_speed = 128\n").unwrap();
        let s = Settings::new(&path);
        s.restore().unwrap();
        assert_eq!(s.fan_speed.get(), 128);
        assert_eq!(s.preheat_bed.get(), 60);
    }

    #[test]
    fn restore_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::new(dir.path().join("absent.toml"));
        assert!(matches!(s.restore(), Err(DialError::Io(_))));
    }

    #[test]
    fn preheat_and_cooldown_drive_targets() {
        let s = Settings::new("unused.toml");
        s.preheat();
        assert_eq!((s.hotend_target.get(), s.bed_target.get()), (200, 60));
        s.cooldown();
        assert_eq!((s.hotend_target.get(), s.bed_target.get()), (0, 0));
    }

    #[test]
    fn print_state_changes_mark_dirty() {
        let s = Settings::new("unused.toml");
        assert!(!s.take_dirty());
        s.start_print();
        assert!(s.take_dirty());
        assert!(!s.take_dirty());
        s.stop_print();
        assert!(s.take_dirty());
    }

    #[test]
    fn home_clears_unknown_extruder() {
        let s = Settings::new("unused.toml");
        s.pos_x.set(12.5);
        s.home();
        assert_eq!(s.pos_x.get(), 0.0);
        assert_eq!(s.extruder.get(), 0.0);
    }
}
