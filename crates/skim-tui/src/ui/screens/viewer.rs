use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use skim_types::Focus;

use crate::{
    app::AppState,
    config::KeyBindings,
    ui::{
        Layout, Theme,
        components::{HelpOverlay, StatusBar},
        expand_tabs,
    },
    views::{CursorRow, NavigableView},
};

/// The two-pane viewer: filtered log on top, filters below
pub struct ViewerScreen;

impl ViewerScreen {
    /// Draw the whole frame from the current state
    pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, tab_width: usize) {
        let (log_area, filter_area, status_area) =
            Layout::viewer(frame.area(), state.filters().len());

        Self::render_log(frame, log_area, state, theme, tab_width);
        Self::render_filters(frame, filter_area, state, theme);
        Self::render_status_bar(frame, status_area, state, theme);

        if state.help_visible {
            HelpOverlay::render(frame, theme);
        }
    }

    fn render_log(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, tab_width: usize) {
        let focused = state.focus == Focus::Log;
        let view = state.log_view();
        let rows = state.log_rows();

        let number_width = view.lines().len().max(1).to_string().len().max(1) as u16;

        let mut table_state = TableState::default();
        match view.cursor_row(&rows) {
            CursorRow::Selected(row) => table_state.select(Some(row)),
            CursorRow::Anchor(row) => *table_state.offset_mut() = row,
            CursorRow::None => {}
        }

        let table_rows = rows.iter().map(|row| {
            let text = Cell::from(expand_tabs(&row.text, tab_width));
            let text = match row.color {
                Some(color) => text.style(theme.swatch(color)),
                None => text.style(theme.text()),
            };
            Row::new(vec![Cell::from(row.number.to_string()).style(theme.text_dim()), text])
        });

        let title = if state.hide_unmatched {
            format!(" Log ({} of {} lines, unmatched hidden) ", rows.len(), view.len())
        } else {
            format!(
                " Log ({} of {} lines matched) ",
                state.matched_line_count(),
                view.len()
            )
        };

        let table = Table::new(
            table_rows,
            [Constraint::Length(number_width), Constraint::Min(1)],
        )
        .header(Row::new(vec!["#", "Line"]).style(theme.table_header()))
        .column_spacing(1)
        .row_highlight_style(theme.row_selected(focused))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.pane_border(focused))
                .title(Span::styled(title, theme.title())),
        );

        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_filters(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let focused = state.focus == Focus::Filters;
        let rows = state.filter_rows();

        let mut table_state = TableState::default();
        table_state.select(state.filter_view().selected());

        let table_rows = rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(row.checkbox()).style(theme.text()),
                Cell::from(row.pattern.clone()).style(theme.swatch(row.color)),
            ])
        });

        let title = format!(
            " Filters ({} of {} enabled) ",
            state.filters().enabled_count(),
            rows.len()
        );

        let table = Table::new(table_rows, [Constraint::Length(3), Constraint::Min(1)])
            .header(Row::new(vec!["", "Pattern"]).style(theme.table_header()))
            .column_spacing(1)
            .row_highlight_style(theme.row_selected(focused))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.pane_border(focused))
                    .title(Span::styled(title, theme.title())),
            );

        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let right = match state.log_view().current_line() {
            Some(line) => {
                let matches = state.cursor_line_matches();
                format!(
                    "{} │ line {}: {} filter{} match",
                    state.focus.label(),
                    line.number(),
                    matches.len(),
                    if matches.len() == 1 { "" } else { "s" }
                )
            }
            None => format!("{} │ no lines", state.focus.label()),
        };

        let status = StatusBar::new(theme)
            .hints(KeyBindings::hints())
            .right(right);

        frame.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use skim_filters::FilterSet;
    use skim_types::{FilterSpec, lines_from};

    use crate::app::Action;

    fn screen_text(state: &AppState) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| ViewerScreen::render(frame, state, &theme, 4))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn sample_state() -> AppState {
        let filters = FilterSet::compile([FilterSpec::new("^ERROR")]).unwrap();
        let lines = lines_from(["INFO start", "ERROR bad", "INFO end"]);
        AppState::new(filters, lines, true)
    }

    #[test]
    fn test_render_hides_unmatched_lines() {
        let text = screen_text(&sample_state());
        assert!(text.contains("ERROR bad"));
        assert!(!text.contains("INFO start"));
        assert!(text.contains("[x]"));
        assert!(text.contains("^ERROR"));
    }

    #[test]
    fn test_render_after_showing_unmatched() {
        let mut state = sample_state();
        state.handle(Action::ToggleHideUnmatched);
        let text = screen_text(&state);
        assert!(text.contains("INFO start"));
        assert!(text.contains("INFO end"));
    }

    #[test]
    fn test_render_disabled_filter_and_help() {
        let mut state = sample_state();
        state.handle(Action::Toggle);
        state.handle(Action::ToggleHelp);
        let text = screen_text(&state);
        assert!(text.contains("[ ]"));
        assert!(!text.contains("ERROR bad"));
        assert!(text.contains("Keybindings"));
    }

    #[test]
    fn test_render_empty_inputs() {
        let state = AppState::new(FilterSet::default(), Vec::new(), false);
        let text = screen_text(&state);
        assert!(text.contains("no lines"));
    }
}
