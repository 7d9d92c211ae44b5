use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::timer::{format_compact, format_elapsed};

/// A saved stopwatch reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Calendar date of the save, `YYYY-MM-DD`
    pub date: String,
    /// Wall-clock time of the save, `HH:MM:SS`
    pub time: String,
    /// Elapsed time as shown with centiseconds
    pub duration: String,
    pub raw_seconds: f64,
    pub target_enabled: bool,
    /// Target in milliseconds, only present when the target was enabled
    pub target_time: Option<u64>,
}

impl SessionSnapshot {
    /// Build a snapshot of `elapsed_ms` saved at `saved_at`.
    ///
    /// The duration always carries seconds and centiseconds so exported rows
    /// stay comparable whatever the display settings were.
    pub fn new(
        saved_at: DateTime<Local>,
        elapsed_ms: u64,
        target_enabled: bool,
        target_ms: u64,
    ) -> Self {
        Self {
            date: saved_at.format("%Y-%m-%d").to_string(),
            time: saved_at.format("%H:%M:%S").to_string(),
            duration: format_elapsed(elapsed_ms, true, true),
            raw_seconds: elapsed_ms as f64 / 1000.0,
            target_enabled,
            target_time: target_enabled.then_some(target_ms),
        }
    }

    /// Save time without seconds, for list rows
    pub fn short_time(&self) -> &str {
        self.time.get(..5).unwrap_or(&self.time)
    }

    /// Format duration as "1h5m", "2m3s" or "7s"
    pub fn format_compact_duration(&self) -> String {
        format_compact(self.raw_seconds)
    }

    /// Whether the enabled target had been met when this session was saved
    pub fn target_met(&self) -> Option<bool> {
        match self.target_time {
            Some(target_ms) if self.target_enabled => {
                Some(self.raw_seconds * 1000.0 >= target_ms as f64)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn saved_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_new_snapshot_fields() {
        let snapshot = SessionSnapshot::new(saved_at(), 65_432, false, 60_000);
        assert_eq!(snapshot.date, "2024-03-09");
        assert_eq!(snapshot.time, "14:05:07");
        assert_eq!(snapshot.duration, "00:01:05.43");
        assert_eq!(snapshot.raw_seconds, 65.432);
        assert!(!snapshot.target_enabled);
        assert_eq!(snapshot.target_time, None);
    }

    #[test]
    fn test_target_time_kept_only_when_enabled() {
        let snapshot = SessionSnapshot::new(saved_at(), 1_000, true, 60_000);
        assert_eq!(snapshot.target_time, Some(60_000));
    }

    #[test]
    fn test_short_time() {
        let snapshot = SessionSnapshot::new(saved_at(), 1_000, false, 0);
        assert_eq!(snapshot.short_time(), "14:05");
    }

    #[test]
    fn test_target_met() {
        let under = SessionSnapshot::new(saved_at(), 59_999, true, 60_000);
        let over = SessionSnapshot::new(saved_at(), 60_000, true, 60_000);
        let disabled = SessionSnapshot::new(saved_at(), 90_000, false, 60_000);
        assert_eq!(under.target_met(), Some(false));
        assert_eq!(over.target_met(), Some(true));
        assert_eq!(disabled.target_met(), None);
    }

    #[test]
    fn test_json_uses_camel_case_and_null_target() {
        let snapshot = SessionSnapshot::new(saved_at(), 2_500, false, 0);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["rawSeconds"], 2.5);
        assert_eq!(json["targetEnabled"], false);
        assert!(json["targetTime"].is_null());
    }
}
