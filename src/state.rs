//! App state: palette session, transcript, sheet, section toggles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::SUGGESTIONS;
use crate::sheet::SheetState;

/// Transcript speaker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
}

impl Message {
    pub fn user(text: String) -> Self {
        Self { speaker: Speaker::User, text }
    }
    pub fn assistant(text: String) -> Self {
        Self { speaker: Speaker::Assistant, text }
    }
}

/// Ask-me-anything overlay. One session per open: the transcript, draft and
/// session id are regenerated on every Closed -> Open transition, so a reply
/// scheduled against an earlier session can be recognised and dropped.
#[derive(Clone, Debug)]
pub struct PaletteState {
    pub visible: bool,
    pub session_id: Uuid,
    pub transcript: Vec<Message>,
    pub draft: String,
    pub cursor: usize,
    /// Indices into SUGGESTIONS matching the current draft.
    pub filtered: Vec<usize>,
    pub selected_index: usize,
    /// A reply is scheduled and has not landed yet.
    pub waiting: bool,
}

impl Default for PaletteState {
    fn default() -> Self {
        Self {
            visible: false,
            session_id: Uuid::nil(),
            transcript: Vec::new(),
            draft: String::new(),
            cursor: 0,
            filtered: (0..SUGGESTIONS.len()).collect(),
            selected_index: 0,
            waiting: false,
        }
    }
}

impl PaletteState {
    /// Closed -> OpenEmpty: fresh session id, empty transcript and draft.
    pub fn open(&mut self) {
        self.visible = true;
        self.session_id = Uuid::new_v4();
        self.transcript.clear();
        self.draft.clear();
        self.cursor = 0;
        self.filtered = (0..SUGGESTIONS.len()).collect();
        self.selected_index = 0;
        self.waiting = false;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Suggestions are shown only before the first exchange.
    pub fn suggestions_visible(&self) -> bool {
        self.visible && self.transcript.is_empty()
    }

    pub fn selected_suggestion(&self) -> Option<&'static str> {
        self.filtered
            .get(self.selected_index)
            .and_then(|&i| SUGGESTIONS.get(i))
            .copied()
    }

    /// Cycle the highlight backward, wrapping past the first entry.
    pub fn cycle_up(&mut self) {
        let len = self.filtered.len();
        if len > 0 {
            self.selected_index = (self.selected_index + len - 1) % len;
        }
    }

    /// Cycle the highlight forward, wrapping past the last entry.
    pub fn cycle_down(&mut self) {
        let len = self.filtered.len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }
}

/// Global app state. Widgets receive only the slice they need.
#[derive(Clone, Debug)]
pub struct AppState {
    pub dark_mode: bool,
    pub palette: PaletteState,
    pub sheet: SheetState,
    pub show_previous_roles: bool,
    pub show_all_projects: bool,
    /// Transient note shown in the status bar (composed mailto link).
    pub status_note: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dark_mode: true,
            palette: PaletteState::default(),
            sheet: SheetState::default(),
            show_previous_roles: false,
            show_all_projects: false,
            status_note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_regenerates_the_session() {
        let mut palette = PaletteState::default();
        palette.open();
        let first = palette.session_id;
        palette.transcript.push(Message::user("hello".into()));
        palette.draft = "draft".into();
        palette.waiting = true;

        palette.close();
        palette.open();
        assert_ne!(palette.session_id, first);
        assert!(palette.transcript.is_empty());
        assert!(palette.draft.is_empty());
        assert!(!palette.waiting);
        assert_eq!(palette.selected_index, 0);
    }

    #[test]
    fn cycling_wraps_both_directions() {
        let mut palette = PaletteState::default();
        palette.open();
        assert_eq!(palette.filtered.len(), 5);

        palette.cycle_up();
        assert_eq!(palette.selected_index, 4);

        palette.selected_index = 0;
        for _ in 0..5 {
            palette.cycle_down();
        }
        assert_eq!(palette.selected_index, 0);
    }

    #[test]
    fn suggestions_hide_once_the_transcript_has_messages() {
        let mut palette = PaletteState::default();
        palette.open();
        assert!(palette.suggestions_visible());
        palette.transcript.push(Message::user("hi".into()));
        assert!(!palette.suggestions_visible());
    }
}
