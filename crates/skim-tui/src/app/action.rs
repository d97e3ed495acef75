/// All possible actions in the application (command pattern)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Navigation within the focused pane
    CursorUp,
    CursorDown,

    /// Toggle the row under the cursor in the focused pane
    Toggle,

    /// Move focus to the next pane
    NextFocus,

    // Display toggles
    ToggleHideUnmatched,
    ToggleHelp,
    CloseHelp,

    /// Terminal resized to (width, height)
    Resize(u16, u16),
}
