use std::io;
use std::path::PathBuf;

use skim_types::SwatchError;
use thiserror::Error;

/// Errors raised while turning rule descriptors into filter specs
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("rule {}: missing required attribute '{attribute}'", .index + 1)]
    MissingAttribute {
        index: usize,
        attribute: &'static str,
    },

    #[error("rule {}: attribute '{attribute}' must be \"y\" or \"n\", got '{value}'", .index + 1)]
    InvalidFlag {
        index: usize,
        attribute: &'static str,
        value: String,
    },

    #[error("rule {}: {source}", .index + 1)]
    InvalidColor {
        index: usize,
        #[source]
        source: SwatchError,
    },

    #[error("rule {}: unsupported rule type '{value}' (only 'matches_text' is supported)", .index + 1)]
    UnsupportedType { index: usize, value: String },
}

impl DecodeError {
    /// Zero-based position of the offending rule
    pub fn index(&self) -> usize {
        match self {
            Self::MissingAttribute { index, .. }
            | Self::InvalidFlag { index, .. }
            | Self::InvalidColor { index, .. }
            | Self::UnsupportedType { index, .. } => *index,
        }
    }
}

/// A filter pattern that failed to compile
#[derive(Debug, Error)]
#[error("filter {} ({label}): invalid pattern '{pattern}': {source}", .index + 1)]
pub struct PatternError {
    /// Zero-based position of the filter in the definition file
    pub index: usize,
    /// Description of the filter, or its pattern when it has none
    pub label: String,
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Errors raised while loading filter definitions or log files from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse filter file '{}': {source}", .path.display())]
    Markup {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("invalid filter file '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}
