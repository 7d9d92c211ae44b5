mod app;
mod clock;
mod config;
mod error;
mod event;
mod history;
mod models;
mod storage;
mod theme;
mod timer;
mod ui;

use std::fs::File;

use app::App;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging();
    log::info!("Starting timelord {}", env!("CARGO_PKG_VERSION"));

    let terminal = ratatui::init();
    let result = App::new()?.run(terminal);
    ratatui::restore();
    result
}

/// Log to a file in the data directory; the terminal belongs to the UI.
/// Runs without logging if the file can't be opened.
fn init_logging() {
    let Ok(path) = config::get_log_path() else {
        return;
    };
    if let Ok(file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
    }
}
