use tracing::debug;

use skim_filters::FilterSet;
use skim_types::{Focus, LogLine};

use super::Action;
use crate::views::{FilterRow, FilterView, LogRow, LogView, NavigableView};

/// Terminal size in cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Global application state
pub struct AppState {
    /// Pane receiving navigation and toggle input
    pub focus: Focus,

    /// Leave unmatched log lines out of the log pane entirely
    pub hide_unmatched: bool,

    pub viewport: Viewport,

    /// Is help overlay visible?
    pub help_visible: bool,

    /// Whether app should quit
    pub should_quit: bool,

    log_view: LogView,
    filter_view: FilterView,
}

impl AppState {
    pub fn new(filters: FilterSet, lines: Vec<LogLine>, hide_unmatched: bool) -> Self {
        Self {
            focus: Focus::default(),
            hide_unmatched,
            viewport: Viewport::default(),
            help_visible: false,
            should_quit: false,
            log_view: LogView::new(lines),
            filter_view: FilterView::new(filters),
        }
    }

    pub fn filters(&self) -> &FilterSet {
        self.filter_view.filters()
    }

    pub fn log_view(&self) -> &LogView {
        &self.log_view
    }

    pub fn filter_view(&self) -> &FilterView {
        &self.filter_view
    }

    /// The pane selected by the current focus
    fn active_view_mut(&mut self) -> &mut dyn NavigableView {
        match self.focus {
            Focus::Filters => &mut self.filter_view,
            Focus::Log => &mut self.log_view,
        }
    }

    /// Apply one input action; every action is valid in every state
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::CursorUp => {
                self.active_view_mut().cursor_up();
            }
            Action::CursorDown => {
                self.active_view_mut().cursor_down();
            }
            Action::Toggle => {
                self.active_view_mut().toggle();
            }
            Action::NextFocus => {
                self.focus = self.focus.next();
            }
            Action::ToggleHideUnmatched => {
                self.hide_unmatched = !self.hide_unmatched;
            }
            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }
            Action::CloseHelp => {
                self.help_visible = false;
            }
            Action::Resize(width, height) => {
                self.viewport = Viewport { width, height };
            }
        }
        debug!(
            focus = self.focus.label(),
            hide_unmatched = self.hide_unmatched,
            "handled {:?}",
            action
        );
    }

    /// Log rows for the current filter and visibility state
    pub fn log_rows(&self) -> Vec<LogRow> {
        self.log_view.rows(self.filters(), self.hide_unmatched)
    }

    pub fn filter_rows(&self) -> Vec<FilterRow> {
        self.filter_view.rows()
    }

    /// Number of log lines owned by some enabled filter
    pub fn matched_line_count(&self) -> usize {
        self.filters().matching_lines(self.log_view.lines()).count()
    }

    /// Indices of every enabled filter matching the line under the log cursor
    pub fn cursor_line_matches(&self) -> Vec<usize> {
        match self.log_view.current_line() {
            Some(line) => self
                .filters()
                .all_matches(&line.text)
                .map(|m| m.index)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skim_types::{FilterSpec, lines_from};

    fn state(patterns: &[&str], lines: &[&str], hide_unmatched: bool) -> AppState {
        let filters = FilterSet::compile(patterns.iter().map(|p| FilterSpec::new(*p))).unwrap();
        AppState::new(filters, lines_from(lines.iter().copied()), hide_unmatched)
    }

    #[test]
    fn test_initial_focus_is_filters() {
        let state = state(&["x"], &["x"], true);
        assert_eq!(state.focus, Focus::Filters);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_next_focus_cycles() {
        let mut state = state(&["x"], &["x"], true);
        state.handle(Action::NextFocus);
        assert_eq!(state.focus, Focus::Log);
        state.handle(Action::NextFocus);
        assert_eq!(state.focus, Focus::Filters);
    }

    #[test]
    fn test_cursor_moves_only_focused_view() {
        let mut state = state(&["a", "b"], &["1", "2", "3"], false);

        state.handle(Action::CursorDown);
        assert_eq!(state.filter_view().selected(), Some(1));
        assert_eq!(state.log_view().selected(), Some(0));

        state.handle(Action::NextFocus);
        state.handle(Action::CursorDown);
        state.handle(Action::CursorDown);
        state.handle(Action::CursorDown);
        assert_eq!(state.log_view().selected(), Some(2));
        assert_eq!(state.filter_view().selected(), Some(1));

        state.handle(Action::CursorUp);
        assert_eq!(state.log_view().selected(), Some(1));
    }

    #[test]
    fn test_toggle_in_filter_focus_changes_matching() {
        let mut state = state(&["x"], &["x"], true);
        assert_eq!(state.log_rows().len(), 1);

        state.handle(Action::Toggle);
        assert!(state.filters().first_match("x").is_none());
        assert!(state.log_rows().is_empty());
    }

    #[test]
    fn test_toggle_in_log_focus_changes_nothing() {
        let mut state = state(&["x"], &["x"], true);
        state.handle(Action::NextFocus);
        state.handle(Action::Toggle);
        assert_eq!(state.filters().enabled_count(), 1);
    }

    #[test]
    fn test_hide_unmatched_toggle_reveals_plain_line() {
        let mut state = state(&["^ERROR"], &["INFO start", "ERROR bad"], true);
        assert_eq!(state.log_rows().len(), 1);

        state.handle(Action::ToggleHideUnmatched);
        let rows = state.log_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "INFO start");
        assert_eq!(rows[0].color, None);
        assert!(rows[1].color.is_some());
        assert_eq!(state.filters().enabled_count(), 1);
    }

    #[test]
    fn test_resize_updates_viewport_only() {
        let mut state = state(&["a", "b"], &["a"], true);
        state.handle(Action::CursorDown);
        state.handle(Action::Resize(120, 40));

        assert_eq!(state.viewport, Viewport { width: 120, height: 40 });
        assert_eq!(state.focus, Focus::Filters);
        assert_eq!(state.filter_view().selected(), Some(1));
    }

    #[test]
    fn test_quit_and_help() {
        let mut state = state(&[], &[], true);
        state.handle(Action::ToggleHelp);
        assert!(state.help_visible);
        state.handle(Action::CloseHelp);
        assert!(!state.help_visible);

        // Navigation on empty panes is a no-op
        state.handle(Action::CursorDown);
        state.handle(Action::Toggle);

        state.handle(Action::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_match_queries() {
        let mut state = state(&["a", "b", "z"], &["ab", "zz", "q"], false);
        assert_eq!(state.matched_line_count(), 2);

        state.handle(Action::NextFocus);
        assert_eq!(state.cursor_line_matches(), [0, 1]);

        state.handle(Action::CursorDown);
        state.handle(Action::CursorDown);
        assert!(state.cursor_line_matches().is_empty());
    }
}
