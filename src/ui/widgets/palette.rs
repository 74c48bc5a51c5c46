//! Ask-me-anything overlay: input, suggestions or transcript, typing indicator.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::content::SUGGESTIONS;
use crate::state::{PaletteState, Speaker};
use crate::ui::layout;
use crate::ui::theme::Palette;

pub fn render(
    f: &mut Frame,
    pal: &Palette,
    palette: &PaletteState,
    spinner_char: char,
    area: Rect,
) {
    f.render_widget(Clear, area);
    let block = Block::default()
        .title("  Ask me anything  ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(pal.border))
        .style(Style::default().bg(pal.elevated));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 3 {
        return;
    }

    render_input(f, pal, palette, inner);

    if palette.suggestions_visible() {
        render_suggestions(f, pal, palette, area, inner);
    } else {
        render_transcript(f, pal, palette, spinner_char, inner);
    }

    let footer = Rect {
        y: inner.y + inner.height - 1,
        height: 1,
        ..inner
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ↵ send · ↑↓ navigate · esc close",
            Style::default().fg(pal.muted),
        ))),
        footer,
    );
}

fn render_input(f: &mut Frame, pal: &Palette, palette: &PaletteState, inner: Rect) {
    let prompt = " › ";
    let line = if palette.draft.is_empty() {
        Line::from(vec![
            Span::styled(prompt, Style::default().fg(pal.accent).add_modifier(Modifier::BOLD)),
            Span::styled("Ask me anything...", Style::default().fg(pal.muted)),
        ])
    } else {
        Line::from(vec![
            Span::styled(prompt, Style::default().fg(pal.accent).add_modifier(Modifier::BOLD)),
            Span::styled(palette.draft.as_str(), Style::default().fg(pal.text)),
        ])
    };
    let input = Rect { height: 1, ..inner };
    f.render_widget(Paragraph::new(line), input);

    let typed = palette
        .draft
        .get(..palette.cursor)
        .map(|s| s.chars().count())
        .unwrap_or(0) as u16;
    let x = (input.x + 3 + typed).min(input.x + input.width.saturating_sub(1));
    f.set_cursor_position(Position { x, y: input.y });
}

fn render_suggestions(
    f: &mut Frame,
    pal: &Palette,
    palette: &PaletteState,
    overlay: Rect,
    inner: Rect,
) {
    let warning = Rect { y: inner.y + 1, height: 1, ..inner };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ! This feature is still under development",
            Style::default().fg(pal.warning),
        ))),
        warning,
    );
    let label = Rect { y: inner.y + 2, height: 1, ..inner };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Suggested questions",
            Style::default().fg(pal.muted),
        ))),
        label,
    );

    let list = layout::palette_suggestion_list(overlay, palette.filtered.len());
    let lines: Vec<Line> = palette
        .filtered
        .iter()
        .take(list.height as usize)
        .enumerate()
        .map(|(i, &idx)| {
            let selected = i == palette.selected_index;
            Line::from(vec![
                Span::styled(
                    if selected { "▎ " } else { "  " },
                    Style::default().fg(pal.accent),
                ),
                Span::styled(
                    SUGGESTIONS[idx],
                    if selected {
                        Style::default().fg(pal.text).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(pal.text_dim)
                    },
                ),
                Span::styled(
                    if selected { "  →" } else { "" },
                    Style::default().fg(pal.muted),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), list);
}

fn render_transcript(
    f: &mut Frame,
    pal: &Palette,
    palette: &PaletteState,
    spinner_char: char,
    inner: Rect,
) {
    let body = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(2),
        ..inner
    };
    if body.height == 0 {
        return;
    }
    let width = body.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for msg in &palette.transcript {
        if !lines.is_empty() {
            lines.push(Line::from(Span::raw("")));
        }
        let (label, label_style) = match msg.speaker {
            Speaker::User => (
                "You ",
                Style::default().fg(pal.accent).add_modifier(Modifier::BOLD),
            ),
            Speaker::Assistant => (
                "Aditya ",
                Style::default().fg(pal.accent_soft).add_modifier(Modifier::BOLD),
            ),
        };
        let indent = " ".repeat(label.len());
        let mut wrapped = wrap_text(&msg.text, width.saturating_sub(label.len()).max(8));
        let mut it = wrapped.drain(..);
        if let Some(first) = it.next() {
            lines.push(Line::from(vec![
                Span::raw(" "),
                Span::styled(label, label_style),
                Span::styled(first, Style::default().fg(pal.text)),
            ]));
        }
        for rest in it {
            lines.push(Line::from(vec![
                Span::raw(" "),
                Span::raw(indent.clone()),
                Span::styled(rest, Style::default().fg(pal.text)),
            ]));
        }
    }

    if palette.waiting {
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "Aditya ",
                Style::default().fg(pal.accent_soft).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{spinner_char} "), Style::default().fg(pal.accent)),
            Span::styled("Typing…", Style::default().fg(pal.muted)),
        ]));
    }

    // Follow the newest message: show the tail that fits.
    let height = body.height as usize;
    let skip = lines.len().saturating_sub(height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
    f.render_widget(Paragraph::new(visible), body);
}

/// Greedy word wrap; long words are split at the width.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            let split: String = word.chars().take(width).collect();
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            out.push(split.clone());
            word = &word[split.len()..];
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_the_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_splits_overlong_words() {
        let lines = wrap_text("abcdefghijkl", 5);
        assert_eq!(lines, vec!["abcde", "fghij", "kl"]);
    }

    #[test]
    fn wrap_of_empty_text_yields_one_blank_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
