use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::App;
use crate::timer::format_elapsed;

use super::digits::{self, GLYPH_HEIGHT};
use super::history::render_history;
use super::{render_background, render_footer, status_color};

/// Render the full timer view
pub fn render_timer(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.theme.palette;
    render_background(frame, area, palette);

    let display = app.timer.display();
    let target_height = if app.timer.target_enabled() { 2 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(3),                // Title
        Constraint::Length(1),                // Status
        Constraint::Length(GLYPH_HEIGHT + 2), // Time display
        Constraint::Length(1),                // Milliseconds
        Constraint::Length(target_height),    // Target progress
        Constraint::Length(3),                // Controls
        Constraint::Min(3),                   // History
        Constraint::Length(1),                // Footer
    ])
    .split(area);

    // Title
    let title = Line::from(vec![
        Span::styled("TIMELORD", Style::default().fg(palette.accent_primary).bold()),
        Span::styled(
            format!("  {}", app.theme.name),
            Style::default().fg(palette.text_secondary),
        ),
    ])
    .centered();
    frame.render_widget(
        Paragraph::new(title).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.accent_secondary)),
        ),
        chunks[0],
    );

    // Status
    let status = app.timer.status();
    let status_line = Line::from(vec![
        Span::styled("● ", Style::default().fg(status_color(status, palette))),
        Span::styled(
            status.label(),
            Style::default().fg(status_color(status, palette)).bold(),
        ),
    ])
    .centered();
    frame.render_widget(Paragraph::new(status_line), chunks[1]);

    // Time display
    let time_color = if app.timer.is_running() {
        palette.accent_primary
    } else {
        palette.text_primary
    };
    render_big_time(
        frame,
        chunks[2],
        &app.timer.formatted(),
        display.font_size,
        time_color,
    );

    // Milliseconds
    if display.show_milliseconds && display.show_seconds {
        let ms_text = format!("{:02} ms", app.timer.centiseconds());
        frame.render_widget(
            Paragraph::new(ms_text)
                .centered()
                .style(Style::default().fg(palette.text_secondary)),
            chunks[3],
        );
    }

    // Target progress
    if app.timer.target_enabled() {
        let target = format_elapsed(app.timer.target_ms(), true, false);
        let progress = app.timer.progress();
        let gauge_color = if app.timer.target_reached() {
            palette.danger
        } else {
            palette.accent_secondary
        };
        let gauge = Gauge::default()
            .block(Block::default())
            .gauge_style(Style::default().fg(gauge_color).bg(palette.bg_secondary))
            .label(format!("Target {}  {:.0}%", target, progress * 100.0))
            .ratio(progress);
        let [gauge_area] = Layout::vertical([Constraint::Length(1)]).areas(chunks[4]);
        frame.render_widget(gauge, gauge_area);
    }

    // Controls
    let controls = if app.timer.is_running() {
        "[Space] Pause  [r] Reset  [s] Save"
    } else if app.timer.elapsed_ms() > 0 {
        "[Space] Resume  [r] Reset  [s] Save"
    } else {
        "[Space] Start"
    };
    frame.render_widget(
        Paragraph::new(Line::from(controls).centered())
            .style(Style::default().fg(palette.text_secondary))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(palette.accent_secondary)),
            ),
        chunks[5],
    );

    render_history(frame, chunks[6], app);

    let nav = "[c] Settings  [t] Theme  [m] Minimal  [+/-] Size  [e] Export  [q] Quit";
    render_footer(frame, chunks[7], app, nav);
}

/// Draw `text` in the block font, or as plain bold text when it does not fit
pub fn render_big_time(frame: &mut Frame, area: Rect, text: &str, font_size: u16, color: Color) {
    let style = Style::default().fg(color).bold();
    let scale = if area.height >= GLYPH_HEIGHT {
        digits::fitting_scale(text, digits::scale_for(font_size), area.width)
    } else {
        None
    };

    match scale.and_then(|s| digits::render(text, s)) {
        Some(rows) => {
            let top_pad = (area.height - GLYPH_HEIGHT) / 2;
            let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
            lines.extend(rows.into_iter().map(|row| Line::from(row).centered()));
            frame.render_widget(Paragraph::new(lines).style(style), area);
        }
        None => {
            let top_pad = area.height.saturating_sub(1) / 2;
            let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
            lines.push(Line::from(text.to_string()).centered());
            frame.render_widget(Paragraph::new(lines).style(style), area);
        }
    }
}
