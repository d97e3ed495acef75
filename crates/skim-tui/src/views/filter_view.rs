use skim_filters::FilterSet;
use skim_types::Swatch;

use super::{Cursor, NavigableView};

/// The filter pane: owns the compiled filters and a cursor over them
///
/// Toggling mutates the filter at the cursor position in place, so the
/// change is visible to the next match query.
#[derive(Debug, Default)]
pub struct FilterView {
    filters: FilterSet,
    cursor: Cursor,
}

/// One rendered filter row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterRow {
    pub index: usize,
    pub checked: bool,
    pub pattern: String,
    pub color: Swatch,
}

impl FilterRow {
    /// Checkbox label, `[x]` or `[ ]`
    pub fn checkbox(&self) -> &'static str {
        if self.checked { "[x]" } else { "[ ]" }
    }
}

impl FilterView {
    pub fn new(filters: FilterSet) -> Self {
        Self {
            filters,
            cursor: Cursor::new(),
        }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// One row per filter, in declaration order
    pub fn rows(&self) -> Vec<FilterRow> {
        self.filters
            .iter()
            .enumerate()
            .map(|(index, filter)| FilterRow {
                index,
                checked: filter.is_enabled(),
                pattern: filter.pattern().to_string(),
                color: filter.color(),
            })
            .collect()
    }
}

impl NavigableView for FilterView {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn len(&self) -> usize {
        self.filters.len()
    }

    /// Flip the enabled flag of the filter under the cursor
    fn toggle(&mut self) {
        if let Some(index) = self.selected() {
            self.filters.toggle(index);
        }
    }
}
