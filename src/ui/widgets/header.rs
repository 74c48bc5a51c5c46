//! Profile header: cycling greeting, name, tagline.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::content::{NAME, TAGLINE};
use crate::ui::theme::Palette;

pub fn render(f: &mut Frame, pal: &Palette, greeting: &str, area: ratatui::prelude::Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(pal.border))
        .style(Style::default().bg(pal.elevated));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::raw("")),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                greeting,
                Style::default().fg(pal.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(", I am {NAME}."),
                Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(TAGLINE, Style::default().fg(pal.text_dim)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
