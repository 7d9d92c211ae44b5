use std::io::Write;
use std::sync::mpsc::Receiver;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{error, info, warn};
use ratatui::{DefaultTerminal, Frame};

use crate::config::{DEFAULT_THEME, NOTIFICATION_TTL, TICK_RATE, get_export_dir};
use crate::error::TimelordError;
use crate::event::{AppEvent, poll_event};
use crate::history::SessionRecorder;
use crate::models::Settings;
use crate::storage::{CsvExporter, FileStorage, SessionExporter, StorageOps};
use crate::theme::{self, THEMES, Theme};
use crate::timer::{TimerEngine, TimerEvent};
use crate::ui::{render_minimal, render_settings_modal, render_theme_picker, render_timer};

/// The current modal state - only one modal can be open at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    Settings,
    ThemePicker,
}

/// Which field is focused in the settings modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    TargetEnabled,
    TargetMinutes,
    ShowSeconds,
    ShowMilliseconds,
}

impl SettingsField {
    pub fn next(&self) -> Self {
        match self {
            SettingsField::TargetEnabled => SettingsField::TargetMinutes,
            SettingsField::TargetMinutes => SettingsField::ShowSeconds,
            SettingsField::ShowSeconds => SettingsField::ShowMilliseconds,
            SettingsField::ShowMilliseconds => SettingsField::TargetEnabled,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SettingsField::TargetEnabled => SettingsField::ShowMilliseconds,
            SettingsField::TargetMinutes => SettingsField::TargetEnabled,
            SettingsField::ShowSeconds => SettingsField::TargetMinutes,
            SettingsField::ShowMilliseconds => SettingsField::ShowSeconds,
        }
    }
}

/// Editing buffer for the settings modal; committed only on save
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub field: SettingsField,
    pub target_enabled: bool,
    pub target_minutes: String,
    pub show_seconds: bool,
    pub show_milliseconds: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A transient message shown in the footer
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    shown_at: Instant,
}

/// The main application state
pub struct App {
    pub running: bool,
    pub minimal: bool,
    pub modal: ModalState,
    pub timer: TimerEngine,
    timer_events: Receiver<TimerEvent>,
    pub history: SessionRecorder,
    pub theme: &'static Theme,
    pub notification: Option<Notification>,

    // Settings modal state
    pub settings_form: SettingsForm,

    // Theme picker state
    pub picker_index: usize,
    picker_original: &'static Theme,

    // Last persisted settings record
    settings: Settings,

    storage: Option<Box<dyn StorageOps>>,
    exporter: Option<Box<dyn SessionExporter>>,
}

impl Default for App {
    fn default() -> Self {
        Self::with_parts(TimerEngine::default(), None, None)
    }
}

impl App {
    /// Create a new application instance backed by the data directory
    pub fn new() -> color_eyre::Result<Self> {
        let storage: Option<Box<dyn StorageOps>> = match FileStorage::open() {
            Ok(storage) => Some(Box::new(storage)),
            Err(e) => {
                warn!("Could not open data directory: {}", e);
                None
            }
        };
        let exporter: Option<Box<dyn SessionExporter>> = match get_export_dir() {
            Ok(dir) => Some(Box::new(CsvExporter::new(dir))),
            Err(e) => {
                warn!("Could not determine export directory: {}", e);
                None
            }
        };

        let mut app = Self::with_parts(TimerEngine::default(), storage, exporter);
        app.load_settings();
        Ok(app)
    }

    /// Assemble an app from its collaborators without touching storage
    pub fn with_parts(
        mut timer: TimerEngine,
        storage: Option<Box<dyn StorageOps>>,
        exporter: Option<Box<dyn SessionExporter>>,
    ) -> Self {
        let timer_events = timer.subscribe();
        let theme = theme::resolve(DEFAULT_THEME);
        Self {
            running: false,
            minimal: false,
            modal: ModalState::None,
            timer,
            timer_events,
            history: SessionRecorder::new(),
            theme,
            notification: None,
            settings_form: SettingsForm::default(),
            picker_index: 0,
            picker_original: theme,
            settings: Settings::default(),
            storage,
            exporter,
        }
    }

    /// Load saved settings and apply them. Session history always starts empty.
    pub fn load_settings(&mut self) {
        let settings = match self.storage.as_ref().map(|s| s.load_settings()) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                warn!("Failed to load settings, using defaults: {}", e);
                Settings::default()
            }
            None => Settings::default(),
        };

        self.timer.apply_settings(&settings);
        self.theme = theme::resolve(&settings.theme);
        self.minimal = settings.is_minimal;
        self.settings = settings;
        info!(
            "Loaded settings: theme={} minimal={}",
            self.theme.key, self.minimal
        );
    }

    /// Run the application's main loop
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            if let Some(event) = poll_event(TICK_RATE)? {
                match event {
                    AppEvent::Key(key) => self.handle_key_event(key),
                    AppEvent::Resize | AppEvent::Tick => {}
                }
            }
            // Tick on every pass so held keys never starve the clock
            self.handle_tick();
        }

        Ok(())
    }

    /// Render the current view
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if self.minimal {
            render_minimal(frame, area, self);
        } else {
            render_timer(frame, area, self);
        }

        match self.modal {
            ModalState::None => {}
            ModalState::Settings => render_settings_modal(frame, area, self),
            ModalState::ThemePicker => render_theme_picker(frame, area, self),
        }
    }

    /// Handle a key event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.modal {
            ModalState::Settings => {
                self.handle_settings_modal_key(key);
                return;
            }
            ModalState::ThemePicker => {
                self.handle_theme_picker_key(key);
                return;
            }
            ModalState::None => {}
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => self.quit(),
            (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => self.quit(),
            (_, KeyCode::Char(' ')) => self.timer.toggle(),
            (_, KeyCode::Char('r')) => self.timer.reset(),
            (_, KeyCode::Char('s')) => self.save_session(),
            (_, KeyCode::Char('e')) => self.export_sessions(),
            (_, KeyCode::Char('x')) => self.clear_history(),
            (_, KeyCode::Char('m')) => self.toggle_minimal(),
            (_, KeyCode::Char('t')) => self.open_theme_picker(),
            (_, KeyCode::Char('c')) => self.open_settings(),
            (_, KeyCode::Char('+')) | (_, KeyCode::Char('=')) => {
                self.timer.increase_font_size();
            }
            (_, KeyCode::Char('-')) => {
                self.timer.decrease_font_size();
            }
            _ => {}
        }

        self.process_timer_events();
    }

    /// Handle settings modal keys
    fn handle_settings_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.modal = ModalState::None;
                return;
            }
            KeyCode::Enter => {
                self.save_settings_form();
                self.modal = ModalState::None;
                return;
            }
            _ => {}
        }

        let form = &mut self.settings_form;
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                form.field = form.field.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.field = form.field.prev();
            }
            KeyCode::Char(' ') => match form.field {
                SettingsField::TargetEnabled => form.target_enabled = !form.target_enabled,
                SettingsField::ShowSeconds => form.show_seconds = !form.show_seconds,
                SettingsField::ShowMilliseconds => {
                    form.show_milliseconds = !form.show_milliseconds
                }
                SettingsField::TargetMinutes => {}
            },
            KeyCode::Backspace if form.field == SettingsField::TargetMinutes => {
                form.target_minutes.pop();
            }
            KeyCode::Char(c)
                if c.is_ascii_digit()
                    && form.field == SettingsField::TargetMinutes
                    && form.target_minutes.len() < 4 =>
            {
                form.target_minutes.push(c);
            }
            _ => {}
        }
    }

    /// Handle theme picker keys
    fn handle_theme_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                // Drop the preview
                self.theme = self.picker_original;
                self.modal = ModalState::None;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.theme = theme::next(self.theme.key);
                self.picker_index = theme::index_of(self.theme.key);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.theme = theme::previous(self.theme.key);
                self.picker_index = theme::index_of(self.theme.key);
            }
            KeyCode::Enter => {
                self.apply_theme(&THEMES[self.picker_index]);
                self.modal = ModalState::None;
            }
            _ => {}
        }
    }

    fn open_settings(&mut self) {
        let display = self.timer.display();
        self.settings_form = SettingsForm {
            field: SettingsField::TargetEnabled,
            target_enabled: self.timer.target_enabled(),
            target_minutes: self.timer.target_minutes().to_string(),
            show_seconds: display.show_seconds,
            show_milliseconds: display.show_milliseconds,
        };
        self.modal = ModalState::Settings;
    }

    /// Commit the settings form to the timer
    fn save_settings_form(&mut self) {
        let form = self.settings_form.clone();
        let minutes = form.target_minutes.parse::<u64>().unwrap_or(0);
        self.timer.set_target_minutes(minutes);
        self.timer.set_target_enabled(form.target_enabled);

        let display = self.timer.display();
        if display.show_seconds != form.show_seconds {
            self.timer.toggle_seconds();
        }
        if display.show_milliseconds != form.show_milliseconds {
            self.timer.toggle_milliseconds();
        }
        self.process_timer_events();
    }

    fn open_theme_picker(&mut self) {
        self.picker_original = self.theme;
        self.picker_index = theme::index_of(self.theme.key);
        self.modal = ModalState::ThemePicker;
    }

    /// Switch to `theme` and remember it
    pub fn apply_theme(&mut self, theme: &'static Theme) {
        self.theme = theme;
        self.picker_original = theme;
        self.persist_settings();
        self.notify(format!("Theme: {}", theme.name), NotificationLevel::Info);
    }

    /// Switch between the full and compact views
    pub fn toggle_minimal(&mut self) {
        self.minimal = !self.minimal;
        self.persist_settings();
    }

    /// Record the current reading in history and write history out
    pub fn save_session(&mut self) {
        let Some(snapshot) = self.timer.snapshot() else {
            self.notify("Nothing to save yet", NotificationLevel::Warning);
            return;
        };

        let duration = snapshot.duration.clone();
        let sessions = self.history.record(snapshot);
        if let Some(ref storage) = self.storage
            && let Err(e) = storage.save_sessions(sessions)
        {
            error!("Failed to save sessions: {}", e);
            self.notify(format!("Failed to save sessions: {}", e), NotificationLevel::Error);
            return;
        }
        info!("Saved session of {}", duration);
        self.notify(format!("Saved {}", duration), NotificationLevel::Info);
    }

    /// Export history to CSV
    pub fn export_sessions(&mut self) {
        let Some(ref exporter) = self.exporter else {
            self.notify("Export is unavailable", NotificationLevel::Error);
            return;
        };

        match self.history.export_all(exporter.as_ref()) {
            Ok(path) => {
                info!("Exported {} sessions to {}", self.history.len(), path.display());
                self.notify(
                    format!("Exported to {}", path.display()),
                    NotificationLevel::Info,
                );
            }
            Err(TimelordError::NothingToExport) => {
                self.notify("No sessions to export!", NotificationLevel::Warning);
            }
            Err(e) => {
                error!("Export failed: {}", e);
                self.notify(format!("Export failed: {}", e), NotificationLevel::Error);
            }
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Handle a timer tick
    pub fn handle_tick(&mut self) {
        self.timer.tick();
        self.process_timer_events();

        if let Some(ref n) = self.notification
            && n.shown_at.elapsed() >= NOTIFICATION_TTL
        {
            self.notification = None;
        }
    }

    /// React to everything the timer announced since the last call
    fn process_timer_events(&mut self) {
        let events: Vec<TimerEvent> = self.timer_events.try_iter().collect();
        let mut settings_dirty = false;

        for event in events {
            match event {
                TimerEvent::Started
                | TimerEvent::Paused
                | TimerEvent::Reset
                | TimerEvent::SettingsChanged => settings_dirty = true,
                TimerEvent::TargetReached => {
                    ring_bell();
                    info!("Target of {} minutes reached", self.timer.target_minutes());
                    self.notify("Target reached!", NotificationLevel::Info);
                }
            }
        }

        if settings_dirty {
            self.persist_settings();
        }
    }

    /// Write the current preferences to storage
    fn persist_settings(&mut self) {
        self.timer.store_settings(&mut self.settings);
        self.settings.theme = self.theme.key.to_string();
        self.settings.is_minimal = self.minimal;

        if let Some(ref storage) = self.storage
            && let Err(e) = storage.save_settings(&self.settings)
        {
            error!("Failed to save settings: {}", e);
            self.notify(format!("Failed to save settings: {}", e), NotificationLevel::Error);
        }
    }

    fn notify(&mut self, message: impl Into<String>, level: NotificationLevel) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        });
    }

    /// Quit the application
    fn quit(&mut self) {
        self.running = false;
    }
}

fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
