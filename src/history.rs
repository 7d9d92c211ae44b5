use std::path::PathBuf;

use crate::config::HISTORY_CAPACITY;
use crate::error::{Result, TimelordError};
use crate::models::SessionSnapshot;
use crate::storage::SessionExporter;

/// Recent saved sessions, newest first.
///
/// Starts empty on every launch; saved history is written out but never read
/// back.
#[derive(Debug, Default)]
pub struct SessionRecorder {
    sessions: Vec<SessionSnapshot>,
}

impl SessionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snapshot at the front, evicting the oldest past capacity
    pub fn record(&mut self, snapshot: SessionSnapshot) -> &[SessionSnapshot] {
        self.sessions.insert(0, snapshot);
        self.sessions.truncate(HISTORY_CAPACITY);
        &self.sessions
    }

    pub fn sessions(&self) -> &[SessionSnapshot] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Hand the whole history to `exporter`
    pub fn export_all(&self, exporter: &dyn SessionExporter) -> Result<PathBuf> {
        if self.sessions.is_empty() {
            return Err(TimelordError::NothingToExport);
        }
        exporter.export(&self.sessions)
    }

    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}
