//! State container and action dispatch for the portfolio TUI.

use tracing::debug;

use crate::actions::Action;
use crate::content::SUGGESTIONS;
use crate::replies::ReplyScheduler;
use crate::state::{AppState, Message};
use crate::suggest::update_suggestion_filter;
use crate::ui::theme::{GREETING_TICKS, NARROW_WIDTH};
use crate::{content, links, ui};

pub struct App {
    pub state: AppState,
    scheduler: ReplyScheduler,
    pub should_quit: bool,
    /// For the spinner and greeting cycle (incremented each tick).
    pub tick: usize,
    /// Last known terminal size (cols, rows).
    pub viewport: (u16, u16),
}

impl App {
    pub fn new(scheduler: ReplyScheduler) -> Self {
        Self {
            state: AppState::default(),
            scheduler,
            should_quit: false,
            tick: 0,
            viewport: (80, 24),
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.viewport.0 < NARROW_WIDTH
    }

    pub fn greeting(&self) -> &'static str {
        content::GREETINGS[(self.tick / GREETING_TICKS) % content::GREETINGS.len()]
    }

    /// Canonical sheet offsets follow the viewport; leaving the narrow layout
    /// unmounts the sheet, which must clear any active gesture.
    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = (cols, rows);
        if self.is_narrow() {
            self.state.sheet.set_viewport(rows);
        } else {
            self.state.sheet.reset();
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleTheme => {
                self.state.dark_mode = !self.state.dark_mode;
            }
            Action::TogglePreviousRoles => {
                self.state.show_previous_roles = !self.state.show_previous_roles;
            }
            Action::ToggleAllProjects => {
                self.state.show_all_projects = !self.state.show_all_projects;
            }
            Action::ComposeEmail => {
                self.state.status_note = match self.state.status_note {
                    Some(_) => None,
                    None => Some(links::mailto(content::CONTACT_EMAIL, "Hello Aditya", "")),
                };
            }

            Action::PaletteShow => {
                self.state.palette.open();
                debug!(session = %self.state.palette.session_id, "palette opened");
            }
            Action::PaletteHide => {
                self.state.palette.close();
            }
            Action::PaletteChar(c) => {
                let palette = &mut self.state.palette;
                let pos = palette.cursor.min(palette.draft.len());
                palette.draft.insert(pos, c);
                palette.cursor = pos + c.len_utf8();
                if palette.transcript.is_empty() {
                    update_suggestion_filter(palette);
                }
            }
            Action::PaletteBackspace => {
                let palette = &mut self.state.palette;
                if palette.cursor > 0 && palette.cursor <= palette.draft.len() {
                    let prev = palette.draft[..palette.cursor]
                        .chars()
                        .next_back()
                        .map(char::len_utf8)
                        .unwrap_or(0);
                    palette.cursor -= prev;
                    palette.draft.remove(palette.cursor);
                    if palette.transcript.is_empty() {
                        update_suggestion_filter(palette);
                    }
                }
            }
            Action::PaletteUp => {
                if self.state.palette.suggestions_visible() {
                    self.state.palette.cycle_up();
                }
            }
            Action::PaletteDown => {
                if self.state.palette.suggestions_visible() {
                    self.state.palette.cycle_down();
                }
            }
            Action::PaletteAccept => {
                let palette = &mut self.state.palette;
                if palette.suggestions_visible() {
                    if let Some(text) = palette.selected_suggestion() {
                        palette.draft = text.to_string();
                        palette.cursor = palette.draft.len();
                        update_suggestion_filter(palette);
                    }
                }
            }
            Action::PaletteSubmit => {
                let draft = self.state.palette.draft.clone();
                if !draft.trim().is_empty() {
                    self.send_message(&draft);
                } else if self.state.palette.suggestions_visible() {
                    // Enter on an empty draft sends the highlighted suggestion.
                    if let Some(text) = self.state.palette.selected_suggestion() {
                        self.send_message(text);
                    }
                }
            }
            Action::PaletteClickSuggestion(index) => {
                let palette = &self.state.palette;
                if palette.suggestions_visible() {
                    if let Some(text) = palette
                        .filtered
                        .get(index)
                        .and_then(|&i| SUGGESTIONS.get(i))
                        .copied()
                    {
                        self.send_message(text);
                    }
                }
            }

            Action::SheetDragStart(row) => {
                if self.is_narrow() {
                    self.state.sheet.begin_drag(row);
                }
            }
            Action::SheetDragMove(row) => self.state.sheet.update_drag(row),
            Action::SheetDragEnd => {
                if let Some(snap) = self.state.sheet.end_drag() {
                    debug!(?snap, offset = self.state.sheet.offset(), "sheet settled");
                }
            }
            Action::SheetOpen => {
                if self.is_narrow() {
                    self.state.sheet.open();
                }
            }
        }
    }

    /// Append the user message, clear the draft and schedule the reply.
    /// Empty submits are ignored; so are submits while a reply is pending,
    /// which keeps exchanges strictly ordered.
    fn send_message(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        let palette = &mut self.state.palette;
        if palette.waiting {
            return;
        }
        palette.transcript.push(Message::user(trimmed.to_string()));
        palette.draft.clear();
        palette.cursor = 0;
        palette.waiting = true;
        self.scheduler.schedule(palette.session_id, trimmed.to_string());
        debug!(session = %palette.session_id, "message sent");
    }

    /// Drain delivered replies. Events whose session id no longer matches
    /// belong to a closed or reset palette and are dropped.
    pub fn poll_replies(&mut self) {
        while let Some(ev) = self.scheduler.try_recv() {
            let palette = &mut self.state.palette;
            if !palette.visible || ev.session_id != palette.session_id {
                debug!(session = %ev.session_id, "dropped reply for retired session");
                continue;
            }
            palette.transcript.push(Message::assistant(ev.text));
            palette.waiting = false;
        }
    }

    pub fn mouse_context(&self) -> crate::events::MouseContext {
        ui::mouse_context(self)
    }
}
