use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Input the app reacts to
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// The terminal was resized
    Resize,
    /// Nothing happened within the tick rate
    Tick,
}

/// Wait up to `tick_rate` for terminal input.
///
/// Returns `AppEvent::Tick` on timeout so the clock keeps repainting, and
/// `None` for input the app ignores (key releases, mouse, focus, paste).
pub fn poll_event(tick_rate: Duration) -> color_eyre::Result<Option<AppEvent>> {
    if !event::poll(tick_rate)? {
        return Ok(Some(AppEvent::Tick));
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
        Event::Resize(_, _) => Ok(Some(AppEvent::Resize)),
        _ => Ok(None),
    }
}
