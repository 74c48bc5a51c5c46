//! Work experience: current role plus a collapsible previous-roles section.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::content::EXPERIENCES;
use crate::ui::theme::Palette;

pub fn render(
    f: &mut Frame,
    pal: &Palette,
    show_previous_roles: bool,
    area: ratatui::prelude::Rect,
) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "CURRENTLY",
        Style::default().fg(pal.muted),
    )));
    if let Some(current) = EXPERIENCES.iter().find(|e| e.is_current) {
        lines.push(Line::from(vec![
            Span::styled(current.company, Style::default().fg(pal.text)),
            Span::styled(
                format!("  {}", current.period.to_uppercase()),
                Style::default().fg(pal.muted),
            ),
            Span::styled(" ●", Style::default().fg(pal.accent)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(current.title, Style::default().fg(pal.accent)),
            Span::styled(
                format!(" · {}", current.location),
                Style::default().fg(pal.text_dim),
            ),
        ]));
    }

    let chevron = if show_previous_roles { "▾" } else { "▸" };
    lines.push(Line::from(Span::styled(
        format!("{chevron} Previous roles"),
        Style::default().fg(pal.muted),
    )));

    if show_previous_roles {
        for exp in EXPERIENCES.iter().filter(|e| !e.is_current) {
            lines.push(Line::from(vec![
                Span::styled("│ ", Style::default().fg(pal.border)),
                Span::styled(exp.company, Style::default().fg(pal.text)),
                Span::styled(
                    format!("  {}", exp.period.to_uppercase()),
                    Style::default().fg(pal.muted),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("│ ", Style::default().fg(pal.border)),
                Span::styled(
                    exp.title,
                    Style::default().fg(pal.accent).add_modifier(Modifier::DIM),
                ),
                Span::styled(
                    format!(" · {}", exp.location),
                    Style::default().fg(pal.text_dim),
                ),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}
