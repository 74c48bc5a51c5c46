//! Full-frame render: header, sections, then the sheet and palette overlays.

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::theme::{self, SPINNER};
use crate::ui::widgets::{
    render_about, render_header, render_palette, render_projects, render_sheet, render_status,
    render_timeline,
};

pub fn render(f: &mut Frame, app: &App, tick: usize) {
    let area = f.area();
    let pal = theme::palette(app.state.dark_mode);
    f.render_widget(Block::default().style(Style::default().bg(pal.bg)), area);

    let narrow = layout::is_narrow(area);
    let regions = layout::compute(area);
    let spinner_char = SPINNER[tick % SPINNER.len()];

    render_header(f, pal, app.greeting(), regions.header);

    let body = layout::body_regions(regions.body, app.state.show_previous_roles);
    render_timeline(f, pal, app.state.show_previous_roles, body.timeline);
    render_about(f, pal, body.about);
    if !narrow {
        render_projects(
            f,
            pal,
            app.state.dark_mode,
            app.state.show_all_projects,
            body.projects,
        );
    }

    if narrow {
        render_sheet(f, pal, &app.state.sheet, area);
    }
    render_status(
        f,
        pal,
        narrow,
        app.state.palette.waiting,
        app.state.status_note.as_deref(),
        spinner_char,
        regions.status,
    );

    if app.state.palette.visible {
        render_palette(
            f,
            pal,
            &app.state.palette,
            spinner_char,
            layout::palette_overlay_rect(area),
        );
    }
}
