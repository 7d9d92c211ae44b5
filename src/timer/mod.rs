mod display;
mod engine;

pub use display::{format_compact, format_elapsed};
pub use engine::{TimerEngine, TimerEvent, TimerStatus};
