use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use crate::app::App;

use super::digits::GLYPH_HEIGHT;
use super::timer::render_big_time;
use super::{centered_rect, render_background, render_footer, status_color};

/// Render the compact view: the time, the status and a key hint
pub fn render_minimal(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.theme.palette;
    render_background(frame, area, palette);

    let status = app.timer.status();
    let box_area = centered_rect(48, GLYPH_HEIGHT + 6, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(status_color(status, palette)))
        .title(Line::from(Span::styled(
            format!(" {} ", status.label()),
            Style::default().fg(status_color(status, palette)).bold(),
        )))
        .title_bottom(
            Line::from(" [Space] [r] [s] [m] Expand ")
                .centered()
                .style(Style::default().fg(palette.text_secondary)),
        );

    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Time
        Constraint::Length(1), // Notification
    ])
    .split(inner);

    let time_color = if app.timer.is_running() {
        palette.accent_primary
    } else {
        palette.text_primary
    };
    let mut text = app.timer.formatted();
    let display = app.timer.display();
    if display.show_milliseconds && display.show_seconds {
        text = format!("{}.{:02}", text, app.timer.centiseconds());
    }
    render_big_time(frame, chunks[0], &text, display.font_size, time_color);

    render_footer(frame, chunks[1], app, "");
}
