//! Shared types for skim
//!
//! This crate contains data structures used across multiple skim crates.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use thiserror::Error;

// ============================================================================
// Filter Types
// ============================================================================

/// An RGB colour swatch, displayed as `#RRGGBB`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error returned when a colour string is not six hex digits
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid colour '{0}': expected six hex digits")]
pub struct SwatchError(pub String);

impl Swatch {
    pub const BLACK: Swatch = Swatch::new(0, 0, 0);
    pub const WHITE: Swatch = Swatch::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a colour written as `RRGGBB` or `#RRGGBB` (either case)
    pub fn parse_hex(s: &str) -> Result<Self, SwatchError> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SwatchError(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| SwatchError(s.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Normalized `#RRGGBB` form
    pub fn hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Swatch {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl From<Swatch> for Color {
    fn from(swatch: Swatch) -> Self {
        Color::Rgb(swatch.r, swatch.g, swatch.b)
    }
}

/// What a filter rule matches against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FilterKind {
    /// Match the text of the line
    #[default]
    MatchesText,
}

impl FilterKind {
    /// Name used in filter definition files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MatchesText => "matches_text",
        }
    }
}

/// Error returned for a filter `type` other than the supported ones
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported filter type '{0}'")]
pub struct FilterKindError(pub String);

impl FromStr for FilterKind {
    type Err = FilterKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matches_text" => Ok(Self::MatchesText),
            other => Err(FilterKindError(other.to_string())),
        }
    }
}

/// One user-authored filter rule
///
/// Everything except `enabled` is fixed once the rule is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSpec {
    /// Pattern text (a regex, or a literal when `is_regex` is false)
    pub pattern: String,
    pub enabled: bool,
    /// Invert the match: the rule claims lines its pattern does not match
    pub excluding: bool,
    pub description: String,
    pub color: Swatch,
    pub kind: FilterKind,
    pub case_sensitive: bool,
    pub is_regex: bool,
}

impl FilterSpec {
    /// An enabled, case-sensitive regex rule with a white swatch
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            enabled: true,
            excluding: false,
            description: String::new(),
            color: Swatch::WHITE,
            kind: FilterKind::MatchesText,
            case_sensitive: true,
            is_regex: true,
        }
    }

    pub fn with_color(mut self, color: Swatch) -> Self {
        self.color = color;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    pub fn literal(mut self) -> Self {
        self.is_regex = false;
        self
    }

    pub fn excluding(mut self) -> Self {
        self.excluding = true;
        self
    }

    /// Human readable label: the description, or the pattern when there is none
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.pattern
        } else {
            &self.description
        }
    }
}

// ============================================================================
// Log Types
// ============================================================================

/// A single line of the loaded log file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    /// Zero-based position in the file
    pub index: usize,
    pub text: String,
}

impl LogLine {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// One-based line number as shown to the user
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Build log lines from plain strings, numbering them in order
pub fn lines_from<I, S>(texts: I) -> Vec<LogLine>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| LogLine::new(index, text))
        .collect()
}

// ============================================================================
// UI Types
// ============================================================================

/// Which pane receives navigation and toggle input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Filters,
    Log,
}

impl Focus {
    /// The next pane in tab order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Filters => Self::Log,
            Self::Log => Self::Filters,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Filters => "Filters",
            Self::Log => "Log",
        }
    }
}
