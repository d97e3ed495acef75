use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::{Layout, Theme};

/// Help overlay showing keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, theme: &Theme) {
        let popup_area = Layout::centered(frame.area(), 46, 17);

        // Clear the background
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled("Keybindings", theme.title())),
            Line::from(""),
            Line::from(Span::styled("Navigation", theme.text_highlight())),
            Self::key_line(theme, "k/↑", "Move cursor up"),
            Self::key_line(theme, "j/↓", "Move cursor down"),
            Self::key_line(theme, "Tab", "Switch between log and filters"),
            Line::from(""),
            Line::from(Span::styled("Filters", theme.text_highlight())),
            Self::key_line(theme, "Space", "Enable/disable filter"),
            Self::key_line(theme, "Enter", "Enable/disable filter"),
            Self::key_line(theme, "h", "Hide/show unmatched lines"),
            Line::from(""),
            Self::key_line(theme, "?", "Toggle this help"),
            Self::key_line(theme, "q", "Quit"),
        ];

        let help_widget = Paragraph::new(help_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focused())
                .title(Span::styled(" Help ", theme.title())),
        );

        frame.render_widget(help_widget, popup_area);
    }

    fn key_line<'a>(theme: &Theme, key: &'a str, desc: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("  {:>8}", key), theme.text_highlight()),
            Span::styled(format!("  {}", desc), theme.text()),
        ])
    }
}
