mod export;
mod files;

use std::path::PathBuf;

use crate::error::Result;
use crate::models::{SessionSnapshot, Settings};

pub use export::CsvExporter;
pub use files::FileStorage;

/// Persistence operations the app needs from its storage backend
pub trait StorageOps {
    /// Load settings, falling back to defaults when nothing has been saved yet
    fn load_settings(&self) -> Result<Settings>;

    fn save_settings(&self, settings: &Settings) -> Result<()>;

    /// Overwrite the saved session history
    fn save_sessions(&self, sessions: &[SessionSnapshot]) -> Result<()>;
}

/// Writes a batch of sessions somewhere and reports where
pub trait SessionExporter {
    fn export(&self, sessions: &[SessionSnapshot]) -> Result<PathBuf>;
}
