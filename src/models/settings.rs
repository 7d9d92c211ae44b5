use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_FONT_SIZE, DEFAULT_TARGET_MINUTES, DEFAULT_THEME};

/// Theme key written by older releases, before named themes existed
const LEGACY_DARK_THEME: &str = "dark";

/// Persisted user settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: String,
    pub font_size: u16,
    pub show_milliseconds: bool,
    pub show_seconds: bool,
    pub is_minimal: bool,
    pub target_enabled: bool,
    /// Target duration in milliseconds
    pub target_time: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            show_milliseconds: false,
            show_seconds: true,
            is_minimal: false,
            target_enabled: false,
            target_time: DEFAULT_TARGET_MINUTES * 60 * 1000,
        }
    }
}

impl Settings {
    /// Fix up values loaded from disk: map the legacy theme key and fill in
    /// an empty theme.
    pub fn normalized(mut self) -> Self {
        if self.theme.is_empty() || self.theme == LEGACY_DARK_THEME {
            self.theme = DEFAULT_THEME.to_string();
        }
        self
    }
}
