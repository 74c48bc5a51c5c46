//! User and system actions.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleTheme,
    TogglePreviousRoles,
    ToggleAllProjects,
    /// Show (or hide) the composed contact mailto link in the status bar.
    ComposeEmail,

    PaletteShow,
    PaletteHide,
    PaletteChar(char),
    PaletteBackspace,
    PaletteUp,
    PaletteDown,
    /// Copy the highlighted suggestion into the draft.
    PaletteAccept,
    PaletteSubmit,
    /// Mouse click on the nth visible suggestion row.
    PaletteClickSuggestion(usize),

    SheetDragStart(u16),
    SheetDragMove(u16),
    SheetDragEnd,
    SheetOpen,
}
