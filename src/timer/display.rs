use crate::config::{DEFAULT_FONT_SIZE, FONT_SIZE_MAX, FONT_SIZE_MIN};

/// Presentation preferences for the elapsed time readout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_seconds: bool,
    pub show_milliseconds: bool,
    pub font_size: u16,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_seconds: true,
            show_milliseconds: false,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Format elapsed milliseconds for display.
///
/// `HH:MM` when seconds are hidden, otherwise `HH:MM:SS`, with a `.cc`
/// centisecond suffix when `include_subsecond` is set. Hours are not capped
/// and grow past two digits as needed.
pub fn format_elapsed(ms: u64, show_seconds: bool, include_subsecond: bool) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if !show_seconds {
        return format!("{:02}:{:02}", hours, minutes);
    }

    let time_str = format!("{:02}:{:02}:{:02}", hours, minutes, seconds);
    if include_subsecond {
        format!("{}.{:02}", time_str, centiseconds(ms))
    } else {
        time_str
    }
}

/// Hundredths of a second within the current second
pub fn centiseconds(ms: u64) -> u64 {
    (ms % 1000) / 10
}

/// Apply `delta` to a font size, clamped to the allowed range
pub fn clamp_font_size(current: u16, delta: i16) -> u16 {
    let next = i32::from(current) + i32::from(delta);
    next.clamp(i32::from(FONT_SIZE_MIN), i32::from(FONT_SIZE_MAX)) as u16
}

/// Format seconds compactly for list rows: `1h5m`, `2m3s`, `7s`
pub fn format_compact(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}h{}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_elapsed(0, true, false), "00:00:00");
        assert_eq!(format_elapsed(0, false, false), "00:00");
        assert_eq!(format_elapsed(0, true, true), "00:00:00.00");
    }

    #[test]
    fn test_format_with_seconds() {
        assert_eq!(format_elapsed(65_432, true, false), "00:01:05");
        assert_eq!(format_elapsed(3_725_000, true, false), "01:02:05");
    }

    #[test]
    fn test_format_without_seconds() {
        assert_eq!(format_elapsed(65_432, false, false), "00:01");
        // Subsecond flag has no effect when seconds are hidden
        assert_eq!(format_elapsed(3_725_990, false, true), "01:02");
    }

    #[test]
    fn test_format_subsecond_is_two_digit_centiseconds() {
        assert_eq!(format_elapsed(65_432, true, true), "00:01:05.43");
        assert_eq!(format_elapsed(1_005, true, true), "00:00:01.00");
        assert_eq!(format_elapsed(1_999, true, true), "00:00:01.99");
    }

    #[test]
    fn test_hours_are_not_capped() {
        assert_eq!(format_elapsed(25 * 3_600_000, true, false), "25:00:00");
        assert_eq!(format_elapsed(100 * 3_600_000 + 61_000, true, false), "100:01:01");
        assert_eq!(format_elapsed(123 * 3_600_000, false, false), "123:00");
    }

    #[test]
    fn test_fields_sum_to_whole_seconds() {
        let samples = [
            0u64,
            999,
            1_000,
            59_999,
            60_000,
            3_599_999,
            3_600_000,
            86_399_999,
            360_000_000,
            987_654_321,
        ];
        for ms in samples {
            let formatted = format_elapsed(ms, true, false);
            let parts: Vec<u64> = formatted.split(':').map(|p| p.parse().unwrap()).collect();
            assert_eq!(parts.len(), 3);
            assert!(formatted.split(':').all(|p| p.len() >= 2));
            assert!(parts[1] < 60 && parts[2] < 60);
            assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], ms / 1000);
        }
    }

    #[test]
    fn test_centiseconds() {
        assert_eq!(centiseconds(0), 0);
        assert_eq!(centiseconds(9), 0);
        assert_eq!(centiseconds(10), 1);
        assert_eq!(centiseconds(12_345), 34);
    }

    #[test]
    fn test_clamp_font_size() {
        assert_eq!(clamp_font_size(42, 4), 46);
        assert_eq!(clamp_font_size(42, -4), 38);
        assert_eq!(clamp_font_size(78, 4), 80);
        assert_eq!(clamp_font_size(80, 4), 80);
        assert_eq!(clamp_font_size(34, -4), 32);
        assert_eq!(clamp_font_size(32, -4), 32);
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(7.9), "7s");
        assert_eq!(format_compact(123.0), "2m3s");
        assert_eq!(format_compact(3_900.0), "1h5m");
        assert_eq!(format_compact(-1.0), "0s");
    }
}
