use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::App;
use crate::theme::{EffectParameters, Palette, THEMES, Theme};

use super::centered_rect;

/// Render the theme picker. The highlighted theme is already live behind it.
pub fn render_theme_picker(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.theme.palette;
    let modal_area = centered_rect(50, THEMES.len() as u16 + 7, area);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Span::styled(
            " Theme ",
            Style::default().fg(palette.accent_primary).bold(),
        ))
        .title_bottom(
            Line::from(" [↑↓] Preview  [Enter] Apply  [Esc] Cancel ")
                .centered()
                .style(Style::default().fg(palette.text_secondary)),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent_secondary))
        .style(Style::default().bg(palette.bg_secondary));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let [list_area, effects_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

    let items: Vec<ListItem> = THEMES
        .iter()
        .map(|theme| ListItem::new(theme_line(theme, palette)))
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(palette.bg_primary).bold())
        .highlight_symbol("› ");
    let mut state = ListState::default().with_selected(Some(app.picker_index));
    frame.render_stateful_widget(list, list_area, &mut state);

    let effects = &THEMES[app.picker_index].effects;
    frame.render_widget(
        Paragraph::new(effects_line(effects))
            .centered()
            .style(Style::default().fg(palette.text_secondary))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(palette.accent_secondary)),
            ),
        effects_area,
    );
}

/// Name followed by swatches of the theme's own accents
fn theme_line(theme: &Theme, current: &Palette) -> Line<'static> {
    let swatch = |color| Span::styled("██", Style::default().fg(color));
    Line::from(vec![
        Span::styled(
            format!("{:<20}", theme.name),
            Style::default().fg(current.text_primary),
        ),
        swatch(theme.palette.bg_primary),
        swatch(theme.palette.accent_primary),
        swatch(theme.palette.accent_secondary),
        swatch(theme.palette.success),
    ])
}

fn effects_line(effects: &EffectParameters) -> String {
    format!(
        "particles {}  glow {:.1}  speed {:.1}",
        effects.particle_count, effects.glow_intensity, effects.animation_speed
    )
}
