//! Keybindings and mouse mapping: Ctrl+K / '/' palette, Esc close, t theme,
//! drag on the sheet handle.

use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::actions::Action;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(
    event: &KeyEvent,
    palette_visible: bool,
    suggestions_visible: bool,
) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);

    if code == KeyCode::Char('k') && mods.contains(KeyModifiers::CONTROL) {
        return Some(if palette_visible {
            Action::PaletteHide
        } else {
            Action::PaletteShow
        });
    }
    if code == KeyCode::Esc {
        return Some(Action::PaletteHide);
    }

    if palette_visible {
        return match code {
            KeyCode::Enter => Some(Action::PaletteSubmit),
            KeyCode::Backspace => Some(Action::PaletteBackspace),
            KeyCode::Up => Some(Action::PaletteUp),
            KeyCode::Down => Some(Action::PaletteDown),
            KeyCode::Tab if suggestions_visible => Some(Action::PaletteAccept),
            // Allow Alt for accented chars; only block Ctrl/Cmd combinations.
            KeyCode::Char(c)
                if !mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::SUPER) =>
            {
                Some(Action::PaletteChar(c))
            }
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::PaletteShow),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('r') => Some(Action::TogglePreviousRoles),
        KeyCode::Char('m') => Some(Action::ToggleAllProjects),
        KeyCode::Char('o') => Some(Action::SheetOpen),
        KeyCode::Char('e') => Some(Action::ComposeEmail),
        _ => None,
    }
}

/// Geometry the mouse mapping needs, computed from the current frame layout.
#[derive(Clone, Debug, Default)]
pub struct MouseContext {
    pub sheet_visible: bool,
    pub sheet_dragging: bool,
    pub sheet_handle: Rect,
    pub palette_visible: bool,
    pub palette_area: Rect,
    pub suggestion_list: Rect,
    pub suggestion_count: usize,
}

pub fn mouse_to_action(event: &MouseEvent, ctx: &MouseContext) -> Option<Action> {
    let at = Position::new(event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if ctx.palette_visible {
                if ctx.suggestion_list.contains(at) {
                    let index = (event.row - ctx.suggestion_list.y) as usize;
                    if index < ctx.suggestion_count {
                        return Some(Action::PaletteClickSuggestion(index));
                    }
                }
                // A click outside the overlay closes it, like a backdrop click.
                if !ctx.palette_area.contains(at) {
                    return Some(Action::PaletteHide);
                }
                return None;
            }
            if ctx.sheet_visible && ctx.sheet_handle.contains(at) {
                return Some(Action::SheetDragStart(event.row));
            }
            None
        }
        MouseEventKind::Drag(MouseButton::Left) if ctx.sheet_dragging => {
            Some(Action::SheetDragMove(event.row))
        }
        MouseEventKind::Up(MouseButton::Left) if ctx.sheet_dragging => Some(Action::SheetDragEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn ctrl_k_toggles_the_palette() {
        let ev = key(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(&ev, false, false), Some(Action::PaletteShow));
        assert_eq!(key_to_action(&ev, true, true), Some(Action::PaletteHide));
    }

    #[test]
    fn characters_reach_the_draft_only_while_the_palette_is_open() {
        let ev = key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(key_to_action(&ev, true, true), Some(Action::PaletteChar('x')));
        assert_eq!(key_to_action(&ev, false, false), None);
    }

    #[test]
    fn bare_shortcuts_are_suppressed_while_typing() {
        let ev = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(key_to_action(&ev, false, false), Some(Action::Quit));
        assert_eq!(key_to_action(&ev, true, true), Some(Action::PaletteChar('q')));
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn handle_click_starts_a_drag_and_moves_follow() {
        let ctx = MouseContext {
            sheet_visible: true,
            sheet_handle: Rect::new(0, 20, 80, 2),
            ..MouseContext::default()
        };
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 10, 21);
        assert_eq!(mouse_to_action(&down, &ctx), Some(Action::SheetDragStart(21)));

        // Moves and releases only map while a gesture is active.
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 10, 15);
        assert_eq!(mouse_to_action(&drag, &ctx), None);

        let active = MouseContext { sheet_dragging: true, ..ctx };
        assert_eq!(mouse_to_action(&drag, &active), Some(Action::SheetDragMove(15)));
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 10, 15);
        assert_eq!(mouse_to_action(&up, &active), Some(Action::SheetDragEnd));
    }

    #[test]
    fn suggestion_clicks_and_backdrop_clicks_route_by_geometry() {
        let ctx = MouseContext {
            palette_visible: true,
            palette_area: Rect::new(10, 3, 60, 16),
            suggestion_list: Rect::new(11, 7, 58, 5),
            suggestion_count: 5,
            ..MouseContext::default()
        };
        let on_third = mouse(MouseEventKind::Down(MouseButton::Left), 20, 9);
        assert_eq!(
            mouse_to_action(&on_third, &ctx),
            Some(Action::PaletteClickSuggestion(2))
        );

        let outside = mouse(MouseEventKind::Down(MouseButton::Left), 5, 1);
        assert_eq!(mouse_to_action(&outside, &ctx), Some(Action::PaletteHide));

        let inside_chrome = mouse(MouseEventKind::Down(MouseButton::Left), 20, 4);
        assert_eq!(mouse_to_action(&inside_chrome, &ctx), None);
    }
}
