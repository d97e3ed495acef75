use serde::Deserialize;
use skim_types::{FilterKind, FilterKindError, FilterSpec, Swatch};

use crate::error::DecodeError;

/// A filter definition file as produced by the markup parser
///
/// ```xml
/// <TextAnalysisTool.NET version="2023-04-25" showOnlyFilteredLines="False">
///   <filters>
///     <filter enabled="y" excluding="n" description="" backColor="87cefa"
///             type="matches_text" case_sensitive="n" regex="y" text="^debug" />
///   </filters>
/// </TextAnalysisTool.NET>
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FilterDocument {
    #[serde(rename = "@version", default)]
    pub version: Option<String>,

    #[serde(rename = "@showOnlyFilteredLines", default)]
    pub show_only_filtered_lines: Option<String>,

    #[serde(default)]
    filters: FilterList,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct FilterList {
    #[serde(rename = "filter", default)]
    rules: Vec<RuleDescriptor>,
}

/// One `<filter>` element with its attributes still in file encoding
///
/// Every attribute is optional here so the decoder can name the missing one.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RuleDescriptor {
    #[serde(rename = "@enabled", default)]
    pub enabled: Option<String>,

    #[serde(rename = "@excluding", default)]
    pub excluding: Option<String>,

    #[serde(rename = "@description", default)]
    pub description: Option<String>,

    #[serde(rename = "@backColor", alias = "@color", default)]
    pub color: Option<String>,

    #[serde(rename = "@type", default)]
    pub kind: Option<String>,

    #[serde(rename = "@case_sensitive", default)]
    pub case_sensitive: Option<String>,

    #[serde(rename = "@regex", default)]
    pub regex: Option<String>,

    #[serde(rename = "@text", default)]
    pub text: Option<String>,
}

impl FilterDocument {
    pub fn new(rules: Vec<RuleDescriptor>) -> Self {
        Self {
            version: None,
            show_only_filtered_lines: None,
            filters: FilterList { rules },
        }
    }

    /// Rule descriptors in file order
    pub fn rules(&self) -> &[RuleDescriptor] {
        &self.filters.rules
    }

    /// The `showOnlyFilteredLines` flag, if present and recognisable
    ///
    /// Informational only; it never drives the viewer's hide toggle.
    pub fn show_only_filtered_lines(&self) -> Option<bool> {
        match self.show_only_filtered_lines.as_deref()?.to_ascii_lowercase().as_str() {
            "true" | "y" | "yes" => Some(true),
            "false" | "n" | "no" => Some(false),
            _ => None,
        }
    }

    /// Decode every rule, stopping at the first malformed one
    pub fn decode(&self) -> Result<Vec<FilterSpec>, DecodeError> {
        decode_rules(self.rules())
    }
}

impl RuleDescriptor {
    /// A descriptor with every attribute set, as written by TextAnalysisTool
    pub fn matches_text(text: &str, color: &str) -> Self {
        Self {
            enabled: Some("y".to_string()),
            excluding: Some("n".to_string()),
            description: Some(String::new()),
            color: Some(color.to_string()),
            kind: Some(FilterKind::MatchesText.as_str().to_string()),
            case_sensitive: Some("n".to_string()),
            regex: Some("y".to_string()),
            text: Some(text.to_string()),
        }
    }
}

/// Decode a sequence of rule descriptors, preserving order
pub fn decode_rules(rules: &[RuleDescriptor]) -> Result<Vec<FilterSpec>, DecodeError> {
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| decode_rule(index, rule))
        .collect()
}

/// Decode a single rule descriptor found at `index`
pub fn decode_rule(index: usize, rule: &RuleDescriptor) -> Result<FilterSpec, DecodeError> {
    let kind = required(index, &rule.kind, "type")?
        .parse::<FilterKind>()
        .map_err(|FilterKindError(value)| DecodeError::UnsupportedType { index, value })?;

    let color = Swatch::parse_hex(required(index, &rule.color, "backColor")?)
        .map_err(|source| DecodeError::InvalidColor { index, source })?;

    Ok(FilterSpec {
        pattern: required(index, &rule.text, "text")?.to_string(),
        enabled: flag(index, &rule.enabled, "enabled")?,
        excluding: flag(index, &rule.excluding, "excluding")?,
        description: rule.description.clone().unwrap_or_default(),
        color,
        kind,
        case_sensitive: flag(index, &rule.case_sensitive, "case_sensitive")?,
        is_regex: flag(index, &rule.regex, "regex")?,
    })
}

fn required<'a>(
    index: usize,
    value: &'a Option<String>,
    attribute: &'static str,
) -> Result<&'a str, DecodeError> {
    value
        .as_deref()
        .ok_or(DecodeError::MissingAttribute { index, attribute })
}

/// `y`/`n` only; anything else is rejected rather than defaulted
fn flag(index: usize, value: &Option<String>, attribute: &'static str) -> Result<bool, DecodeError> {
    match required(index, value, attribute)? {
        "y" => Ok(true),
        "n" => Ok(false),
        other => Err(DecodeError::InvalidFlag {
            index,
            attribute,
            value: other.to_string(),
        }),
    }
}
