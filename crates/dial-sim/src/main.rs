//! Dial terminal simulator.
//!
//! Renders the demo printer menus as ASCII frames on stdout and reads encoder
//! events from stdin, one per line: `+`/`cw`/`down` turn clockwise,
//! `-`/`ccw`/`up` counter-clockwise, an empty line or `ok` clicks, `q` quits.

mod display;
mod input;
mod menus;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use dial_menu::MenuTheme;
use dial_types::config::DialConfig;

use display::AsciiDisplay;
use input::LineInput;
use settings::Settings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg or DIAL_CONFIG env var, else defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DIAL_CONFIG").ok())
    {
        Some(path) => DialConfig::load(Path::new(&path))
            .with_context(|| format!("loading config {path}"))?,
        None => DialConfig::default(),
    };
    log::info!(
        "Starting Dial simulator ({}x{})",
        config.screen.width,
        config.screen.height,
    );
    let theme = MenuTheme::from_config(&config);

    let settings_path = std::env::var("DIAL_SETTINGS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("dial-settings.toml"));
    let settings = Settings::new(settings_path);
    if settings.path().exists() {
        settings::report("Restore settings", settings.restore());
    }

    let stdout = std::io::stdout();
    let mut display = AsciiDisplay::new(stdout.lock(), theme.screen, theme.cursor);
    let stdin = std::io::stdin();
    let mut input = LineInput::new(stdin.lock());

    menus::run(&settings, theme, &mut display, &mut input)?;
    log::info!("Simulator shutdown complete");
    Ok(())
}
