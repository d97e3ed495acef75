//! Filter processing for skim
//!
//! This crate decodes TextAnalysisTool filter definitions, compiles them into
//! matchers, resolves which filter owns a log line, and loads log files.

mod decode;
mod engine;
mod error;
mod source;

pub use decode::{FilterDocument, RuleDescriptor, decode_rule, decode_rules};
pub use engine::{CompiledFilter, FilterMatch, FilterSet};
pub use error::{DecodeError, LoadError, PatternError};
pub use source::{
    load_filter_document, load_filter_specs, parse_filter_document, read_log_lines, split_lines,
};

// Re-export types used in our public API
pub use skim_types::{FilterSpec, LogLine, Swatch};
