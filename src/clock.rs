use chrono::{DateTime, Local};

/// Trait for abstracting time operations, enabling testability
pub trait Clock: Send + Sync {
    /// Get the current Unix timestamp in milliseconds
    fn now_millis(&self) -> i64;

    /// Get the current local datetime
    fn now_datetime(&self) -> DateTime<Local>;
}

/// System clock implementation using real time
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn now_datetime(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI64, Ordering};

    use chrono::{DateTime, Local, TimeZone};

    use super::Clock;

    /// A clock that only moves when told to. Clones share the same time.
    #[derive(Clone, Default)]
    pub struct ManualClock {
        millis: Arc<AtomicI64>,
    }

    impl ManualClock {
        pub fn new(start_millis: i64) -> Self {
            Self {
                millis: Arc::new(AtomicI64::new(start_millis)),
            }
        }

        pub fn advance(&self, millis: i64) {
            self.millis.fetch_add(millis, Ordering::SeqCst);
        }

        pub fn set(&self, millis: i64) {
            self.millis.store(millis, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> i64 {
            self.millis.load(Ordering::SeqCst)
        }

        fn now_datetime(&self) -> DateTime<Local> {
            Local
                .timestamp_millis_opt(self.now_millis())
                .single()
                .unwrap_or_else(Local::now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_now_millis() {
        let clock = SystemClock;
        let ms = clock.now_millis();
        // Should be after Jan 1, 2000 in milliseconds
        assert!(ms > 946_684_800_000);
    }

    #[test]
    fn test_system_clock_now_datetime() {
        let clock = SystemClock;
        let dt = clock.now_datetime();
        assert!(dt.format("%Y").to_string().parse::<i32>().unwrap() >= 2024);
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let start = clock.now_millis();
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(clock.now_millis() - start >= 10);
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(1_000);
        let other = clock.clone();
        clock.advance(500);
        assert_eq!(other.now_millis(), 1_500);
        other.set(42);
        assert_eq!(clock.now_millis(), 42);
    }
}
