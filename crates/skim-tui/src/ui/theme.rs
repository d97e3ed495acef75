use ratatui::style::{Color, Modifier, Style};

use skim_types::Swatch;

use crate::config::{ConfigError, Palette};

/// Colours and styles for one run of the viewer, built from the palette
#[derive(Clone, Debug)]
pub struct Theme {
    pub matched_fg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,
    pub highlight: Color,
    pub status_bg: Color,
}

impl Theme {
    pub fn from_palette(palette: &Palette) -> Result<Self, ConfigError> {
        let color = |field, value: &str| Palette::color(field, value).map(Color::from);

        Ok(Self {
            matched_fg: color("matched_fg", &palette.matched_fg)?,
            fg: color("text", &palette.text)?,
            fg_dim: color("text_dim", &palette.text_dim)?,
            border: color("border", &palette.border)?,
            border_focused: color("border_focused", &palette.border_focused)?,
            title: color("title", &palette.title)?,
            highlight: color("highlight", &palette.highlight)?,
            status_bg: color("status_bg", &palette.status_bg)?,
        })
    }

    // Border styles
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Border for a pane, depending on whether it has focus
    pub fn pane_border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused()
        } else {
            self.border()
        }
    }

    // Text styles
    pub fn title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// A line or pattern painted with a filter's swatch
    pub fn swatch(&self, swatch: Swatch) -> Style {
        Style::default().fg(self.matched_fg).bg(swatch.into())
    }

    /// Row under the cursor
    pub fn row_selected(&self, focused: bool) -> Style {
        if focused {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        }
    }

    pub fn table_header(&self) -> Style {
        Style::default().fg(self.fg_dim).add_modifier(Modifier::BOLD)
    }

    // Status bar
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.status_bg)
    }

    pub fn status_bar_key(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .bg(self.status_bg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            matched_fg: Color::Black,
            fg: Color::White,
            fg_dim: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            title: Color::Cyan,
            highlight: Color::Yellow,
            status_bg: Color::DarkGray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_palette() {
        let theme = Theme::from_palette(&Palette::default()).unwrap();
        assert_eq!(theme.matched_fg, Color::Rgb(0, 0, 0));

        let style = theme.swatch(Swatch::new(0x87, 0xce, 0xfa));
        assert_eq!(style.bg, Some(Color::Rgb(0x87, 0xce, 0xfa)));
        assert_eq!(style.fg, Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_bad_palette_entry_is_reported() {
        let palette = Palette {
            border: "grey".to_string(),
            ..Palette::default()
        };
        let err = Theme::from_palette(&palette).unwrap_err();
        assert!(matches!(err, ConfigError::Color { field: "border", .. }));
    }
}
