//! Stopwatch engine.
//!
//! Elapsed time is always recomputed from an absolute start timestamp, so
//! dropped or late ticks never cause drift. The engine owns no thread; the
//! caller drives [`TimerEngine::tick`] at whatever rate it likes.
//!
//! ```text
//! Idle -> Running -> Paused -> Running ...
//!   ^                  |
//!   +----- reset ------+
//! ```
//!
//! State changes are announced as [`TimerEvent`]s to every subscriber, in
//! order, before the call that caused them returns.

use std::sync::mpsc::{self, Receiver, Sender};

use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::{DEFAULT_TARGET_MINUTES, FONT_SIZE_STEP};
use crate::models::{SessionSnapshot, Settings};

use super::display::{DisplayOptions, centiseconds, clamp_font_size, format_elapsed};

const MILLIS_PER_MINUTE: u64 = 60 * 1000;

/// Notifications emitted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started,
    Paused,
    Reset,
    TargetReached,
    SettingsChanged,
}

/// The run state of the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Idle,
    /// `start_time` is the epoch millisecond that corresponds to zero elapsed
    Running { start_time: i64 },
    Paused,
}

/// Status shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Ready,
    Running,
    Paused,
    TargetReached,
}

impl TimerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TimerStatus::Ready => "READY",
            TimerStatus::Running => "RUNNING",
            TimerStatus::Paused => "PAUSED",
            TimerStatus::TargetReached => "TARGET REACHED",
        }
    }
}

/// The stopwatch state machine
pub struct TimerEngine {
    clock: Box<dyn Clock>,
    state: TimerState,
    elapsed_ms: u64,
    target_enabled: bool,
    target_ms: u64,
    target_reached: bool,
    display: DisplayOptions,
    subscribers: Vec<Sender<TimerEvent>>,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

impl TimerEngine {
    /// Create an idle engine reading time from `clock`
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            state: TimerState::Idle,
            elapsed_ms: 0,
            target_enabled: false,
            target_ms: DEFAULT_TARGET_MINUTES * MILLIS_PER_MINUTE,
            target_reached: false,
            display: DisplayOptions::default(),
            subscribers: Vec::new(),
        }
    }

    /// Register for notifications. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<TimerEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: TimerEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn start_time(&self) -> Option<i64> {
        match self.state {
            TimerState::Running { start_time } => Some(start_time),
            TimerState::Idle | TimerState::Paused => None,
        }
    }

    pub fn target_enabled(&self) -> bool {
        self.target_enabled
    }

    pub fn target_ms(&self) -> u64 {
        self.target_ms
    }

    pub fn target_minutes(&self) -> u64 {
        self.target_ms / MILLIS_PER_MINUTE
    }

    pub fn target_reached(&self) -> bool {
        self.target_reached
    }

    pub fn display(&self) -> DisplayOptions {
        self.display
    }

    pub fn status(&self) -> TimerStatus {
        match self.state {
            TimerState::Idle => TimerStatus::Ready,
            TimerState::Paused => TimerStatus::Paused,
            TimerState::Running { .. } if self.target_reached => TimerStatus::TargetReached,
            TimerState::Running { .. } => TimerStatus::Running,
        }
    }

    /// Progress toward the target as a ratio (0.0 to 1.0), 0.0 without a target
    pub fn progress(&self) -> f64 {
        if !self.target_enabled || self.target_ms == 0 {
            return 0.0;
        }
        (self.elapsed_ms as f64 / self.target_ms as f64).min(1.0)
    }

    /// Start or resume. Calling this while running changes nothing.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let start_time = self.clock.now_millis() - self.elapsed_ms as i64;
        self.state = TimerState::Running { start_time };
        self.target_reached = false;
        debug!("timer started at {}ms elapsed", self.elapsed_ms);
        self.emit(TimerEvent::Started);
    }

    /// Pause, keeping the elapsed time. Calling this while not running changes nothing.
    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        // Take one last reading so the frozen value is current
        self.tick();
        self.state = TimerState::Paused;
        debug!("timer paused at {}ms", self.elapsed_ms);
        self.emit(TimerEvent::Paused);
    }

    /// Start when stopped, pause when running
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and clear all elapsed time and target state
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.elapsed_ms = 0;
        self.target_reached = false;
        debug!("timer reset");
        self.emit(TimerEvent::Reset);
    }

    /// Recompute elapsed time from the clock and check the target.
    ///
    /// Does nothing unless running, so a pulse that arrives after pause or
    /// reset is harmless.
    pub fn tick(&mut self) {
        let TimerState::Running { start_time } = self.state else {
            return;
        };

        let now_elapsed = (self.clock.now_millis() - start_time).max(0) as u64;
        // A clock stepping backwards must not make elapsed time shrink
        self.elapsed_ms = self.elapsed_ms.max(now_elapsed);

        if self.target_enabled && !self.target_reached && self.elapsed_ms >= self.target_ms {
            self.target_reached = true;
            debug!("target of {}ms reached", self.target_ms);
            self.emit(TimerEvent::TargetReached);
        }
    }

    /// Capture the current reading, or `None` when there is nothing to save
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        if self.elapsed_ms == 0 {
            return None;
        }
        Some(SessionSnapshot::new(
            self.clock.now_datetime(),
            self.elapsed_ms,
            self.target_enabled,
            self.target_ms,
        ))
    }

    /// Format `ms` using the current seconds preference
    pub fn format_elapsed(&self, ms: u64, include_subsecond: bool) -> String {
        format_elapsed(ms, self.display.show_seconds, include_subsecond)
    }

    /// The current reading formatted for the main display
    pub fn formatted(&self) -> String {
        self.format_elapsed(self.elapsed_ms, false)
    }

    /// Hundredths of a second of the current reading
    pub fn centiseconds(&self) -> u64 {
        centiseconds(self.elapsed_ms)
    }

    /// Grow or shrink the font, clamped. Returns whether the size changed.
    pub fn adjust_font_size(&mut self, delta: i16) -> bool {
        let size = clamp_font_size(self.display.font_size, delta);
        if size == self.display.font_size {
            return false;
        }
        self.display.font_size = size;
        self.emit(TimerEvent::SettingsChanged);
        true
    }

    pub fn increase_font_size(&mut self) -> bool {
        self.adjust_font_size(FONT_SIZE_STEP)
    }

    pub fn decrease_font_size(&mut self) -> bool {
        self.adjust_font_size(-FONT_SIZE_STEP)
    }

    pub fn toggle_seconds(&mut self) {
        self.display.show_seconds = !self.display.show_seconds;
        self.emit(TimerEvent::SettingsChanged);
    }

    pub fn toggle_milliseconds(&mut self) {
        self.display.show_milliseconds = !self.display.show_milliseconds;
        self.emit(TimerEvent::SettingsChanged);
    }

    pub fn set_target_enabled(&mut self, enabled: bool) {
        if self.target_enabled == enabled {
            return;
        }
        self.target_enabled = enabled;
        self.revalidate_target();
        self.emit(TimerEvent::SettingsChanged);
    }

    /// Set the target in whole minutes; zero falls back to the default
    pub fn set_target_minutes(&mut self, minutes: u64) {
        let minutes = if minutes == 0 {
            DEFAULT_TARGET_MINUTES
        } else {
            minutes
        };
        let target_ms = minutes.saturating_mul(MILLIS_PER_MINUTE);
        if self.target_ms == target_ms {
            return;
        }
        self.target_ms = target_ms;
        self.revalidate_target();
        self.emit(TimerEvent::SettingsChanged);
    }

    /// Drop a latched target that no longer holds so the next tick can fire it again
    fn revalidate_target(&mut self) {
        if self.target_reached && (!self.target_enabled || self.elapsed_ms < self.target_ms) {
            self.target_reached = false;
        }
    }

    /// Load display and target preferences without emitting events
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.display = DisplayOptions {
            show_seconds: settings.show_seconds,
            show_milliseconds: settings.show_milliseconds,
            font_size: clamp_font_size(settings.font_size, 0),
        };
        self.target_enabled = settings.target_enabled;
        self.target_ms = if settings.target_time == 0 {
            DEFAULT_TARGET_MINUTES * MILLIS_PER_MINUTE
        } else {
            settings.target_time
        };
        self.revalidate_target();
    }

    /// Copy display and target preferences into a settings record
    pub fn store_settings(&self, settings: &mut Settings) {
        settings.font_size = self.display.font_size;
        settings.show_seconds = self.display.show_seconds;
        settings.show_milliseconds = self.display.show_milliseconds;
        settings.target_enabled = self.target_enabled;
        settings.target_time = self.target_ms;
    }
}
