use std::fs;
use std::path::Path;

use tracing::{debug, info};

use skim_types::{FilterSpec, LogLine};

use crate::decode::FilterDocument;
use crate::error::LoadError;

/// Parse filter definition markup into a document of rule descriptors
pub fn parse_filter_document(markup: &str) -> Result<FilterDocument, quick_xml::DeError> {
    quick_xml::de::from_str(markup)
}

/// Read and parse a filter definition file
pub fn load_filter_document(path: &Path) -> Result<FilterDocument, LoadError> {
    let markup = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_filter_document(&markup).map_err(|source| LoadError::Markup {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        version = document.version.as_deref().unwrap_or("?"),
        rules = document.rules().len(),
        "loaded filter file"
    );
    if let Some(show_only) = document.show_only_filtered_lines() {
        debug!(show_only, "filter file showOnlyFilteredLines (informational)");
    }

    Ok(document)
}

/// Read a filter definition file and decode its rules in order
pub fn load_filter_specs(path: &Path) -> Result<Vec<FilterSpec>, LoadError> {
    load_filter_document(path)?
        .decode()
        .map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Read every line of a log file into memory
pub fn read_log_lines(path: &Path) -> Result<Vec<LogLine>, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = split_lines(&bytes);
    info!(path = %path.display(), lines = lines.len(), "loaded log file");
    Ok(lines)
}

/// Split raw bytes into numbered lines
///
/// Accepts `\n` and `\r\n` endings; invalid UTF-8 is replaced.
pub fn split_lines(bytes: &[u8]) -> Vec<LogLine> {
    if bytes.is_empty() {
        return Vec::new();
    }

    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|b| *b == b'\n')
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            LogLine::new(index, String::from_utf8_lossy(raw))
        })
        .collect()
}
