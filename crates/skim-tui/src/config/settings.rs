use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use skim_types::{Swatch, SwatchError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid palette colour for '{field}': {source}")]
    Color {
        field: &'static str,
        #[source]
        source: SwatchError,
    },
}

/// User settings, read from an optional TOML file
///
/// ```toml
/// hide_unmatched = false
/// tab_width = 8
///
/// [palette]
/// border_focused = "#00FFFF"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial state of the hide-unmatched toggle
    pub hide_unmatched: bool,
    /// Columns per tab stop when rendering log lines
    pub tab_width: usize,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hide_unmatched: true,
            tab_width: 4,
            palette: Palette::default(),
        }
    }
}

/// Colours used by the viewer, as `#RRGGBB` strings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Text colour drawn over a filter's swatch
    pub matched_fg: String,
    pub text: String,
    pub text_dim: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub highlight: String,
    pub status_bg: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            matched_fg: "#000000".to_string(),
            text: "#E5E5E5".to_string(),
            text_dim: "#808080".to_string(),
            border: "#585858".to_string(),
            border_focused: "#00CDCD".to_string(),
            title: "#00CDCD".to_string(),
            highlight: "#CDCD00".to_string(),
            status_bg: "#303030".to_string(),
        }
    }
}

impl Palette {
    /// Parse one palette entry, naming the field on failure
    pub fn color(field: &'static str, value: &str) -> Result<Swatch, ConfigError> {
        Swatch::parse_hex(value).map_err(|source| ConfigError::Color { field, source })
    }
}

impl Settings {
    pub fn from_toml_str(path: &str, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&display, &contents)
    }

    /// Load settings if a path is given and the file exists, otherwise defaults
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.hide_unmatched);
        assert_eq!(settings.tab_width, 4);
        let matched_fg = Palette::color("matched_fg", &settings.palette.matched_fg).unwrap();
        assert_eq!(matched_fg, Swatch::BLACK);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_toml_str(
            "test.toml",
            "hide_unmatched = false\n[palette]\nborder = \"#112233\"\n",
        )
        .unwrap();

        assert!(!settings.hide_unmatched);
        assert_eq!(settings.tab_width, 4);
        assert_eq!(
            Palette::color("border", &settings.palette.border).unwrap(),
            Swatch::new(0x11, 0x22, 0x33)
        );
        assert_eq!(settings.palette.matched_fg, "#000000");
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_toml_str("bad.toml", "tab_width = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_bad_palette_colour() {
        assert!(matches!(
            Palette::color("title", "cyan"),
            Err(ConfigError::Color { field: "title", .. })
        ));
    }

    #[test]
    fn test_load_optional() {
        let missing = Settings::load_optional(Some(Path::new("/nonexistent/skim.toml"))).unwrap();
        assert!(missing.hide_unmatched);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"tab_width = 8\n").unwrap();
        let loaded = Settings::load_optional(Some(file.path())).unwrap();
        assert_eq!(loaded.tab_width, 8);
    }
}
