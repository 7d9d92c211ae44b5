use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use chrono::Local;

use crate::error::Result;
use crate::models::SessionSnapshot;

use super::SessionExporter;

pub const CSV_HEADER: [&str; 6] = [
    "Date",
    "Time",
    "Duration",
    "Raw Seconds",
    "Target Enabled",
    "Target Time",
];

/// Write `sessions` as CSV, one row per session in the given order
pub fn write_csv<W: Write>(writer: W, sessions: &[SessionSnapshot]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for session in sessions {
        csv.write_record([
            session.date.clone(),
            session.time.clone(),
            session.duration.clone(),
            session.raw_seconds.to_string(),
            session.target_enabled.to_string(),
            session
                .target_time
                .map(|ms| ms.to_string())
                .unwrap_or_default(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Exports to `timelord_sessions_<date>.csv` inside a directory
#[derive(Debug, Clone)]
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn file_name(stem: &str, attempt: u32) -> String {
        if attempt == 0 {
            format!("{}.csv", stem)
        } else {
            format!("{}-{}.csv", stem, attempt)
        }
    }

    /// Create the first free `timelord_sessions_<date>[-N].csv`
    fn create_file(&self) -> Result<(File, PathBuf)> {
        let stem = format!("timelord_sessions_{}", Local::now().format("%Y-%m-%d"));
        let mut attempt = 0;
        loop {
            let path = self.dir.join(Self::file_name(&stem, attempt));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((file, path)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl SessionExporter for CsvExporter {
    fn export(&self, sessions: &[SessionSnapshot]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let (file, path) = self.create_file()?;
        write_csv(file, sessions)?;
        Ok(path)
    }
}
