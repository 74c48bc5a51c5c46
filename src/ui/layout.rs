//! Layout: header/body/status split, overlay and sheet geometry.
//!
//! The mouse mapping hit-tests against the same rects the widgets draw into,
//! so all overlay geometry lives here.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    HEADER_HEIGHT, MARGIN_X, NARROW_WIDTH, PALETTE_MAX_HEIGHT, PALETTE_MAX_WIDTH, STATUS_HEIGHT,
};
use crate::content::EXPERIENCES;

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn is_narrow(area: Rect) -> bool {
    area.width < NARROW_WIDTH
}

pub fn compute(area: Rect) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(4),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let body = Rect {
        x: chunks[1].x + MARGIN_X,
        y: chunks[1].y,
        width: chunks[1].width.saturating_sub(2 * MARGIN_X),
        height: chunks[1].height,
    };
    LayoutRegions {
        header: chunks[0],
        body,
        status: chunks[2],
    }
}

#[derive(Clone, Debug)]
pub struct BodyRegions {
    pub timeline: Rect,
    pub about: Rect,
    pub projects: Rect,
}

/// Rows the timeline needs: label + current role, the previous-roles toggle,
/// and two rows per previous role when expanded.
fn timeline_height(show_previous_roles: bool) -> u16 {
    let previous = EXPERIENCES.len().saturating_sub(1) as u16;
    let expanded = if show_previous_roles { previous * 2 } else { 0 };
    4 + expanded
}

pub fn body_regions(body: Rect, show_previous_roles: bool) -> BodyRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(timeline_height(show_previous_roles)),
            Constraint::Length(5),
            Constraint::Min(3),
        ])
        .split(body);
    BodyRegions {
        timeline: chunks[0],
        about: chunks[1],
        projects: chunks[2],
    }
}

/// The sheet occupies everything from its offset row to the bottom edge.
pub fn sheet_rect(area: Rect, offset: u16) -> Rect {
    let offset = offset.min(area.height);
    Rect {
        x: area.x,
        y: area.y + offset,
        width: area.width,
        height: area.height - offset,
    }
}

/// Drag gestures start on the top two rows of the sheet.
pub fn sheet_handle_rect(sheet: Rect) -> Rect {
    Rect {
        height: sheet.height.min(2),
        ..sheet
    }
}

/// Centered near the top, like a spotlight search.
pub fn palette_overlay_rect(area: Rect) -> Rect {
    let width = PALETTE_MAX_WIDTH.min(area.width.saturating_sub(4));
    let height = PALETTE_MAX_HEIGHT.min(area.height.saturating_sub(6));
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + 3,
        width,
        height,
    }
}

/// Suggestion rows inside the overlay: input, warning and section label come
/// first, then one row per visible suggestion, leaving the footer free.
pub fn palette_suggestion_list(overlay: Rect, count: usize) -> Rect {
    let inner = Rect {
        x: overlay.x + 1,
        y: overlay.y + 1,
        width: overlay.width.saturating_sub(2),
        height: overlay.height.saturating_sub(2),
    };
    let available = inner.height.saturating_sub(4) as usize;
    Rect {
        x: inner.x,
        y: inner.y + 3,
        width: inner.width,
        height: count.min(available) as u16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_switch_is_width_based() {
        assert!(is_narrow(Rect::new(0, 0, 60, 40)));
        assert!(!is_narrow(Rect::new(0, 0, 100, 40)));
    }

    #[test]
    fn sheet_rect_tracks_the_offset() {
        let area = Rect::new(0, 0, 80, 40);
        let sheet = sheet_rect(area, 37);
        assert_eq!(sheet.y, 37);
        assert_eq!(sheet.height, 3);
        assert_eq!(sheet_handle_rect(sheet).height, 2);
    }

    #[test]
    fn suggestion_list_fits_inside_the_overlay() {
        let overlay = palette_overlay_rect(Rect::new(0, 0, 100, 40));
        let list = palette_suggestion_list(overlay, 5);
        assert_eq!(list.height, 5);
        assert!(list.y > overlay.y);
        assert!(list.y + list.height < overlay.y + overlay.height);
    }
}
