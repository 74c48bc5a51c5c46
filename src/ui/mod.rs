//! UI layer: layout, theme, renderer, widgets.

pub mod layout;
mod renderer;
pub mod theme;

pub mod widgets;

pub use renderer::render;

use ratatui::layout::Rect;

use crate::app::App;
use crate::events::MouseContext;

/// Geometry snapshot for the mouse mapping, taken from the same layout
/// functions render() draws with.
pub fn mouse_context(app: &App) -> MouseContext {
    let (cols, rows) = app.viewport;
    let area = Rect::new(0, 0, cols, rows);
    let narrow = layout::is_narrow(area);
    let palette = &app.state.palette;

    let mut ctx = MouseContext {
        sheet_visible: narrow,
        sheet_dragging: app.state.sheet.is_dragging(),
        palette_visible: palette.visible,
        ..MouseContext::default()
    };
    if narrow {
        let sheet = layout::sheet_rect(area, app.state.sheet.offset());
        ctx.sheet_handle = layout::sheet_handle_rect(sheet);
    }
    if palette.visible {
        let overlay = layout::palette_overlay_rect(area);
        ctx.palette_area = overlay;
        if palette.suggestions_visible() {
            let list = layout::palette_suggestion_list(overlay, palette.filtered.len());
            ctx.suggestion_list = list;
            ctx.suggestion_count = list.height as usize;
        }
    }
    ctx
}
