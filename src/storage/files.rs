use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{get_sessions_path, get_settings_path};
use crate::error::Result;
use crate::models::{SessionSnapshot, Settings};

use super::StorageOps;

/// JSON files in the application data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    settings_path: PathBuf,
    sessions_path: PathBuf,
}

impl FileStorage {
    /// Use the standard data directory, creating it if necessary
    pub fn open() -> Result<Self> {
        Ok(Self {
            settings_path: get_settings_path()?,
            sessions_path: get_sessions_path()?,
        })
    }

    /// Keep both files under `dir`
    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            settings_path: dir.join("settings.json"),
            sessions_path: dir.join("sessions.json"),
        }
    }

    fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(value)?;
        fs::write(path, data)?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

impl StorageOps for FileStorage {
    fn load_settings(&self) -> Result<Settings> {
        if !self.settings_path.exists() {
            return Ok(Settings::default());
        }
        let bytes = fs::read(&self.settings_path)?;
        let settings: Settings = serde_json::from_slice(&bytes)?;
        Ok(settings.normalized())
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        Self::write_json(&self.settings_path, settings)
    }

    fn save_sessions(&self, sessions: &[SessionSnapshot]) -> Result<()> {
        Self::write_json(&self.sessions_path, sessions)
    }
}
