use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, SettingsField, SettingsForm};
use crate::theme::Palette;

use super::centered_rect;

/// Render the settings modal as an overlay
pub fn render_settings_modal(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.theme.palette;
    let modal_area = centered_rect(46, 14, area);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Span::styled(
            " Settings ",
            Style::default().fg(palette.accent_primary).bold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent_secondary))
        .style(Style::default().bg(palette.bg_secondary));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Target enabled
        Constraint::Length(2), // Target minutes
        Constraint::Length(2), // Show seconds
        Constraint::Length(2), // Show milliseconds
        Constraint::Length(1), // Spacer
        Constraint::Length(2), // Controls
    ])
    .split(inner);

    let form = &app.settings_form;
    for (field, chunk) in [
        SettingsField::TargetEnabled,
        SettingsField::TargetMinutes,
        SettingsField::ShowSeconds,
        SettingsField::ShowMilliseconds,
    ]
    .into_iter()
    .zip(chunks.iter())
    {
        frame.render_widget(Paragraph::new(settings_row(form, field, palette)), *chunk);
    }

    let key_style = Style::default().fg(palette.text_primary).bold();
    let controls = Line::from(vec![
        Span::styled("[Enter]", key_style),
        Span::raw(" Save  "),
        Span::styled("[Space]", key_style),
        Span::raw(" Toggle  "),
        Span::styled("[Esc]", key_style),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(controls)
            .centered()
            .style(Style::default().fg(palette.text_secondary)),
        chunks[5],
    );
}

fn settings_row(form: &SettingsForm, field: SettingsField, palette: &Palette) -> Line<'static> {
    let is_selected = form.field == field;
    let style = if is_selected {
        Style::default().fg(palette.accent_primary).bold()
    } else {
        Style::default().fg(palette.text_primary)
    };

    let (label, value) = match field {
        SettingsField::TargetEnabled => ("Target alert:", checkbox(form.target_enabled)),
        SettingsField::TargetMinutes => {
            let value = if is_selected {
                format!("{}_ min", form.target_minutes)
            } else {
                format!("{} min", form.target_minutes)
            };
            ("Target time:", value)
        }
        SettingsField::ShowSeconds => ("Show seconds:", checkbox(form.show_seconds)),
        SettingsField::ShowMilliseconds => {
            ("Show milliseconds:", checkbox(form.show_milliseconds))
        }
    };

    let marker = if is_selected { "› " } else { "  " };
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(format!("{:<22}", label), style),
        Span::styled(value, style),
    ])
}

fn checkbox(on: bool) -> String {
    if on { "[x]".into() } else { "[ ]".into() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::resolve;

    fn row_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_selected_minutes_shows_cursor() {
        let form = SettingsForm {
            field: SettingsField::TargetMinutes,
            target_minutes: "45".into(),
            ..SettingsForm::default()
        };
        let palette = &resolve("cyber-blue").palette;
        let text = row_text(&settings_row(&form, SettingsField::TargetMinutes, palette));
        assert!(text.starts_with("› "));
        assert!(text.ends_with("45_ min"));
    }

    #[test]
    fn test_checkbox_rows() {
        let form = SettingsForm {
            show_seconds: true,
            ..SettingsForm::default()
        };
        let palette = &resolve("cyber-blue").palette;
        let seconds = row_text(&settings_row(&form, SettingsField::ShowSeconds, palette));
        let millis = row_text(&settings_row(&form, SettingsField::ShowMilliseconds, palette));
        assert!(seconds.ends_with("[x]"));
        assert!(millis.ends_with("[ ]"));
    }
}
