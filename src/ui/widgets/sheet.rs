//! Bottom sheet (narrow layout): backdrop, drag handle, project list.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::content::PROJECTS;
use crate::sheet::SheetState;
use crate::ui::layout;
use crate::ui::theme::{self, Palette};

pub fn render(f: &mut Frame, pal: &Palette, sheet: &SheetState, area: Rect) {
    if let Some(opacity) = sheet.backdrop_opacity() {
        let above = Rect {
            height: sheet.offset().min(area.height),
            ..area
        };
        f.render_widget(
            Block::default().style(Style::default().bg(theme::backdrop_color(pal, opacity))),
            above,
        );
    }

    let rect = layout::sheet_rect(area, sheet.offset());
    if rect.height == 0 {
        return;
    }
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(pal.border))
        .title(" ━━━━ ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(pal.elevated));
    let inner = block.inner(rect);
    f.render_widget(block, rect);
    if inner.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(" PROJECTS", Style::default().fg(pal.muted)),
        Span::styled("  drag ↕ · o open", Style::default().fg(pal.muted).add_modifier(Modifier::DIM)),
    ]));

    for project in PROJECTS {
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {}", project.title),
                Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  →", Style::default().fg(pal.muted)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", project.description),
            Style::default().fg(pal.text_dim),
        )));
        lines.push(Line::from(Span::styled(
            format!("   ↗ {}", project.link),
            Style::default().fg(pal.accent_soft),
        )));
    }

    let visible: Vec<Line> = lines.into_iter().take(inner.height as usize).collect();
    f.render_widget(Paragraph::new(visible), inner);
}
