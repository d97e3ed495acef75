use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Layout helper for consistent screen layouts
pub struct Layout;

impl Layout {
    /// Split the screen into log pane, filter pane and status bar
    ///
    /// The filter pane fits its rows (plus borders and header) but never
    /// takes more than a third of the screen.
    pub fn viewer(area: Rect, filter_count: usize) -> (Rect, Rect, Rect) {
        let wanted = u16::try_from(filter_count).unwrap_or(u16::MAX).saturating_add(3);
        let filter_height = wanted.min(area.height / 3).max(4);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),                // Log lines
                Constraint::Length(filter_height), // Filters
                Constraint::Length(1),             // Status bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Centered popup of at most the given size
    pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width.saturating_sub(4));
        let height = height.min(area.height.saturating_sub(4));

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_fits_filters() {
        let (log, filters, status) = Layout::viewer(Rect::new(0, 0, 80, 30), 2);
        assert_eq!(filters.height, 5);
        assert_eq!(status.height, 1);
        assert_eq!(log.height, 24);
    }

    #[test]
    fn test_viewer_caps_filter_pane() {
        let (_, filters, _) = Layout::viewer(Rect::new(0, 0, 80, 30), 100);
        assert_eq!(filters.height, 10);
    }

    #[test]
    fn test_centered_popup() {
        let popup = Layout::centered(Rect::new(0, 0, 100, 40), 50, 20);
        assert_eq!(popup, Rect::new(25, 10, 50, 20));
    }
}
