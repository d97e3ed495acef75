//! Navigable panes: a bounded cursor plus a per-pane toggle

mod cursor;
mod filter_view;
mod log_view;

pub use cursor::Cursor;
pub use filter_view::{FilterRow, FilterView};
pub use log_view::{CursorRow, LogRow, LogView};

/// Capabilities shared by the log and filter panes
pub trait NavigableView {
    fn cursor(&self) -> &Cursor;

    fn cursor_mut(&mut self) -> &mut Cursor;

    /// Number of rows the cursor can visit
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highest valid cursor position, or `None` when there is nothing to select
    fn max_cursor(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Move up one row, stopping at the first
    fn cursor_up(&mut self) -> usize {
        let max = self.max_cursor();
        self.cursor_mut().up(max)
    }

    /// Move down one row, stopping at the last
    fn cursor_down(&mut self) -> usize {
        let max = self.max_cursor();
        self.cursor_mut().down(max)
    }

    /// Position under the cursor, or `None` for an empty pane
    fn selected(&self) -> Option<usize> {
        self.cursor().selected(self.max_cursor())
    }

    /// Act on the row under the cursor
    fn toggle(&mut self);
}
