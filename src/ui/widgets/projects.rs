//! Featured project cards with a show-more toggle (wide layout).

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content::{Project, FEATURED_PROJECTS, PROJECTS};
use crate::ui::theme::Palette;

const CARD_HEIGHT: u16 = 6;

pub fn render(
    f: &mut Frame,
    pal: &Palette,
    dark_mode: bool,
    show_all: bool,
    area: Rect,
) {
    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(1),
    ];
    if show_all {
        constraints.push(Constraint::Length(CARD_HEIGHT));
    }
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "FEATURED PROJECTS",
            Style::default().fg(pal.muted),
        ))),
        rows[0],
    );

    render_card_row(f, pal, dark_mode, &PROJECTS[..FEATURED_PROJECTS], rows[1]);

    let toggle = if show_all {
        "▾ Show less"
    } else {
        "▸ Show more"
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            toggle,
            Style::default().fg(pal.muted),
        ))),
        rows[2],
    );

    if show_all {
        render_card_row(f, pal, dark_mode, &PROJECTS[FEATURED_PROJECTS..], rows[3]);
    }
}

fn render_card_row(f: &mut Frame, pal: &Palette, dark_mode: bool, projects: &[Project], area: Rect) {
    if area.height == 0 {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (project, column) in projects.iter().zip(columns.iter()) {
        render_card(f, pal, dark_mode, project, *column);
    }
}

fn render_card(f: &mut Frame, pal: &Palette, dark_mode: bool, project: &Project, area: Rect) {
    // The accent token only tints cards in dark mode, like the original
    // gradient overlays.
    let border = if dark_mode {
        let (r, g, b) = project.accent;
        Color::Rgb(r, g, b)
    } else {
        pal.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(pal.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let body = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let lines = vec![
        Line::from(Span::styled(
            project.title,
            Style::default().fg(pal.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            project.description,
            Style::default().fg(pal.text_dim),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);

    if inner.height > 1 {
        let link_row = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("↗ {}", project.link),
                Style::default().fg(pal.accent_soft),
            ))),
            link_row,
        );
    }
}
