mod digits;
mod history;
mod minimal;
mod settings;
mod themes;
mod timer;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    widgets::{Block, Paragraph},
};

use crate::app::{App, NotificationLevel};
use crate::theme::Palette;
use crate::timer::TimerStatus;

pub use minimal::render_minimal;
pub use settings::render_settings_modal;
pub use themes::render_theme_picker;
pub use timer::render_timer;

/// Fill `area` with the theme background
pub fn render_background(frame: &mut Frame, area: Rect, palette: &Palette) {
    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(palette.bg_primary)
                .fg(palette.text_primary),
        ),
        area,
    );
}

/// Render the footer area with either a notification or navigation text
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, nav_text: &str) {
    let palette = &app.theme.palette;
    if let Some(ref n) = app.notification {
        let color = match n.level {
            NotificationLevel::Info => palette.success,
            NotificationLevel::Warning => palette.warning,
            NotificationLevel::Error => palette.danger,
        };
        frame.render_widget(
            Paragraph::new(n.message.as_str())
                .centered()
                .style(Style::default().fg(color).bold()),
            area,
        );
    } else {
        frame.render_widget(
            Paragraph::new(nav_text)
                .centered()
                .style(Style::default().fg(palette.text_secondary)),
            area,
        );
    }
}

/// Color for the status label
pub fn status_color(status: TimerStatus, palette: &Palette) -> ratatui::style::Color {
    match status {
        TimerStatus::Ready => palette.text_secondary,
        TimerStatus::Running => palette.success,
        TimerStatus::Paused => palette.warning,
        TimerStatus::TargetReached => palette.danger,
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_rect_shrinks_in_small_area() {
        let area = Rect::new(0, 0, 20, 6);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect.width, 16);
        assert_eq!(rect.height, 4);
        assert_eq!(rect.x, 2);
        assert_eq!(rect.y, 1);
    }
}
