use directories::{ProjectDirs, UserDirs};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, TimelordError};

/// Tick rate for the event loop (50ms)
///
/// Elapsed time is recomputed from absolute timestamps on every tick, so this
/// only controls how smoothly the centiseconds repaint.
pub const TICK_RATE: Duration = Duration::from_millis(50);

/// How long footer notifications stay visible
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Smallest allowed timer font size
pub const FONT_SIZE_MIN: u16 = 32;
/// Largest allowed timer font size
pub const FONT_SIZE_MAX: u16 = 80;
/// Font size change per keypress
pub const FONT_SIZE_STEP: i16 = 4;
pub const DEFAULT_FONT_SIZE: u16 = 42;

/// Number of saved sessions kept in the history panel
pub const HISTORY_CAPACITY: usize = 10;

/// Target duration used when none (or an invalid one) is configured
pub const DEFAULT_TARGET_MINUTES: u64 = 25;

pub const DEFAULT_THEME: &str = "cyber-blue";

const APP_NAME: &str = "timelord";
const SETTINGS_FILE: &str = "settings.json";
const SESSIONS_FILE: &str = "sessions.json";
const LOG_FILE: &str = "timelord.log";

/// Get the application data directory, creating it if necessary.
///
/// - Linux: `~/.local/share/timelord`
/// - macOS: `~/Library/Application Support/timelord`
/// - Windows: `C:\Users\<User>\AppData\Roaming\timelord`
pub fn get_data_dir() -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from("", "", APP_NAME).ok_or(TimelordError::NoDataDirectory)?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.to_path_buf())
}

/// Path to `settings.json` in the data directory
pub fn get_settings_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(SETTINGS_FILE))
}

/// Path to `sessions.json` in the data directory
pub fn get_sessions_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(SESSIONS_FILE))
}

/// Path to `timelord.log` in the data directory
pub fn get_log_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(LOG_FILE))
}

/// Directory CSV exports are written to.
///
/// Prefers the user's download directory and falls back to the data directory.
pub fn get_export_dir() -> Result<PathBuf> {
    if let Some(dir) = UserDirs::new().and_then(|u| u.download_dir().map(|d| d.to_path_buf()))
        && dir.is_dir()
    {
        return Ok(dir);
    }
    get_data_dir()
}
