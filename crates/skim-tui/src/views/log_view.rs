use skim_filters::FilterSet;
use skim_types::{LogLine, Swatch};

use super::{Cursor, NavigableView};

/// The log pane: every loaded line plus a cursor over all of them
#[derive(Debug, Default)]
pub struct LogView {
    lines: Vec<LogLine>,
    cursor: Cursor,
}

/// One rendered log row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRow {
    /// Zero-based line index in the file
    pub index: usize,
    /// One-based line number label
    pub number: usize,
    pub text: String,
    /// Colour of the owning filter; `None` renders the row plain
    pub color: Option<Swatch>,
}

/// Where the log cursor lands among the rendered rows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorRow {
    /// The cursor line is rendered at this row
    Selected(usize),
    /// The cursor line is hidden; the viewport anchors at this row instead
    Anchor(usize),
    /// Nothing to select
    None,
}

impl LogView {
    pub fn new(lines: Vec<LogLine>) -> Self {
        Self {
            lines,
            cursor: Cursor::new(),
        }
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// The line under the cursor
    pub fn current_line(&self) -> Option<&LogLine> {
        self.lines.get(self.selected()?)
    }

    /// Rows to render for the current filter state
    ///
    /// Matched lines carry their filter's colour. Unmatched lines render
    /// plain, or are left out entirely when `hide_unmatched` is set.
    pub fn rows(&self, filters: &FilterSet, hide_unmatched: bool) -> Vec<LogRow> {
        self.lines
            .iter()
            .filter_map(|line| {
                let color = filters.first_match(&line.text).map(|m| m.filter.color());
                if color.is_none() && hide_unmatched {
                    return None;
                }
                Some(LogRow {
                    index: line.index,
                    number: line.number(),
                    text: line.text.clone(),
                    color,
                })
            })
            .collect()
    }

    /// Locate the cursor line among rendered rows
    pub fn cursor_row(&self, rows: &[LogRow]) -> CursorRow {
        let Some(cursor) = self.selected() else {
            return CursorRow::None;
        };
        if rows.is_empty() {
            return CursorRow::None;
        }

        match rows.iter().position(|row| row.index >= cursor) {
            Some(pos) if rows[pos].index == cursor => CursorRow::Selected(pos),
            Some(pos) => CursorRow::Anchor(pos),
            None => CursorRow::Anchor(rows.len() - 1),
        }
    }
}

impl NavigableView for LogView {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn len(&self) -> usize {
        self.lines.len()
    }

    /// Log lines cannot be switched on or off
    fn toggle(&mut self) {}
}
