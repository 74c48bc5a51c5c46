//! Status bar: reply indicator on the left, key hints on the right.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::Palette;

pub fn render(
    f: &mut Frame,
    pal: &Palette,
    narrow: bool,
    waiting: bool,
    note: Option<&str>,
    spinner_char: char,
    area: ratatui::prelude::Rect,
) {
    let left = if let Some(note) = note {
        format!(" {note}")
    } else if waiting {
        format!(" {spinner_char} Typing…")
    } else {
        " Ready".to_string()
    };
    let right = if narrow {
        " ^k ask · o projects · e email · t theme · q quit "
    } else {
        " ^k ask · e email · t theme · r roles · m more · q quit "
    };
    let width = area.width as usize;
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    let pad = width.saturating_sub(left_len + right_len);
    let line = format!("{}{}{}", left, " ".repeat(pad), right);
    let span = Span::styled(line, Style::default().fg(pal.muted).bg(pal.elevated));
    f.render_widget(Paragraph::new(span), area);
}
