//! About section.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::content::ABOUT;
use crate::ui::theme::Palette;

pub fn render(f: &mut Frame, pal: &Palette, area: ratatui::prelude::Rect) {
    let lines = vec![
        Line::from(Span::styled("ABOUT", Style::default().fg(pal.muted))),
        Line::from(Span::styled(ABOUT, Style::default().fg(pal.text_dim))),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
