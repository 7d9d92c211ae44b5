use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::app::App;
use crate::models::SessionSnapshot;
use crate::theme::Palette;

/// Render the recent sessions panel
pub fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.theme.palette;
    let title = format!(" Sessions ({}) ", app.history.len());
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(palette.accent_primary).bold()))
        .title_bottom(Line::from(" [x] Clear ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent_secondary));

    let items = build_history_items(app.history.sessions(), palette);
    frame.render_widget(List::new(items).block(block), area);
}

fn build_history_items(
    sessions: &[SessionSnapshot],
    palette: &Palette,
) -> Vec<ListItem<'static>> {
    if sessions.is_empty() {
        return vec![
            ListItem::new(
                Line::from("No sessions recorded yet")
                    .centered()
                    .style(Style::default().fg(palette.text_secondary)),
            ),
            ListItem::new(
                Line::from("Press [s] to record time")
                    .centered()
                    .style(Style::default().fg(palette.text_secondary)),
            ),
        ];
    }

    sessions
        .iter()
        .enumerate()
        .map(|(index, session)| {
            let mut spans = vec![
                Span::styled(
                    format!(" #{:<3}", index + 1),
                    Style::default().fg(palette.text_secondary),
                ),
                Span::styled(
                    session.short_time().to_string(),
                    Style::default().fg(palette.text_primary),
                ),
                Span::styled(" → ", Style::default().fg(palette.accent_secondary)),
                Span::styled(
                    session.format_compact_duration(),
                    Style::default().fg(palette.accent_primary).bold(),
                ),
            ];
            match session.target_met() {
                Some(true) => {
                    spans.push(Span::styled("  ✔ target", Style::default().fg(palette.success)))
                }
                Some(false) => {
                    spans.push(Span::styled("  ◌ target", Style::default().fg(palette.warning)))
                }
                None => {}
            }
            ListItem::new(Line::from(spans))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::resolve;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_empty_history_placeholder() {
        let items = build_history_items(&[], &resolve("cyber-blue").palette);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_one_item_per_session() {
        let at = Local.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let sessions = vec![
            SessionSnapshot::new(at, 1_000, false, 0),
            SessionSnapshot::new(at, 2_000, true, 1_000),
            SessionSnapshot::new(at, 3_000, true, 60_000),
        ];
        let items = build_history_items(&sessions, &resolve("light").palette);
        assert_eq!(items.len(), 3);
    }
}
