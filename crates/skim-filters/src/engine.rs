use regex::{Regex, RegexBuilder};
use tracing::debug;

use skim_types::{FilterSpec, LogLine, Swatch};

use crate::error::PatternError;

/// A filter spec together with its compiled matcher
pub struct CompiledFilter {
    spec: FilterSpec,

    /// Matcher built from the pattern, honouring the regex and case flags
    regex: Regex,
}

impl CompiledFilter {
    /// Compile a filter spec
    ///
    /// Literal patterns are escaped before compiling.
    pub fn new(spec: FilterSpec) -> Result<Self, regex::Error> {
        let source = if spec.is_regex {
            spec.pattern.clone()
        } else {
            regex::escape(&spec.pattern)
        };

        let regex = RegexBuilder::new(&source)
            .case_insensitive(!spec.case_sensitive)
            .build()?;

        Ok(Self { spec, regex })
    }

    /// Check if the text matches this filter, ignoring whether it is enabled
    ///
    /// Excluding filters invert the pattern result.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text) != self.spec.excluding
    }

    /// Get the original pattern
    pub fn pattern(&self) -> &str {
        &self.spec.pattern
    }

    pub fn color(&self) -> Swatch {
        self.spec.color
    }

    pub fn is_enabled(&self) -> bool {
        self.spec.enabled
    }

    /// Flip the enabled flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.spec.enabled = !self.spec.enabled;
        self.spec.enabled
    }
}

impl std::fmt::Debug for CompiledFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledFilter")
            .field("pattern", &self.spec.pattern)
            .field("enabled", &self.spec.enabled)
            .field("excluding", &self.spec.excluding)
            .field("case_sensitive", &self.spec.case_sensitive)
            .field("regex", &self.spec.is_regex)
            .finish()
    }
}

/// The filter that owns a line, with its position in the set
#[derive(Clone, Copy, Debug)]
pub struct FilterMatch<'a> {
    pub index: usize,
    pub filter: &'a CompiledFilter,
}

/// Ordered collection of compiled filters
///
/// Order is the declaration order from the definition file; the first
/// enabled filter that matches a line owns it.
#[derive(Debug, Default)]
pub struct FilterSet {
    filters: Vec<CompiledFilter>,
}

impl FilterSet {
    /// Compile every spec in order
    ///
    /// Stops at the first invalid pattern and returns no filters at all.
    pub fn compile<I>(specs: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = FilterSpec>,
    {
        let filters = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let label = spec.label().to_string();
                let pattern = spec.pattern.clone();
                CompiledFilter::new(spec).map_err(|source| PatternError {
                    index,
                    label,
                    pattern,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = filters.len(), "compiled filters");
        Ok(Self { filters })
    }

    /// The first enabled filter matching the text, in declaration order
    pub fn first_match(&self, text: &str) -> Option<FilterMatch<'_>> {
        self.all_matches(text).next()
    }

    /// Every enabled filter matching the text, in declaration order
    pub fn all_matches<'a>(&'a self, text: &str) -> impl Iterator<Item = FilterMatch<'a>> {
        self.filters
            .iter()
            .enumerate()
            .filter(|(_, filter)| filter.is_enabled())
            .filter(move |(_, filter)| filter.matches(text))
            .map(|(index, filter)| FilterMatch { index, filter })
    }

    /// Scan lines in bulk, yielding each matched line with the filter that owns it
    pub fn matching_lines<'a>(
        &'a self,
        lines: &'a [LogLine],
    ) -> impl Iterator<Item = (&'a LogLine, FilterMatch<'a>)> + 'a {
        lines
            .iter()
            .filter_map(move |line| self.first_match(&line.text).map(|m| (line, m)))
    }

    /// Flip the enabled flag of the filter at `index`, returning the new value
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let filter = self.filters.get_mut(index)?;
        let enabled = filter.toggle();
        debug!(index, enabled, pattern = filter.pattern(), "toggled filter");
        Some(enabled)
    }

    pub fn get(&self, index: usize) -> Option<&CompiledFilter> {
        self.filters.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledFilter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn enabled_count(&self) -> usize {
        self.filters.iter().filter(|f| f.is_enabled()).count()
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a CompiledFilter;
    type IntoIter = std::slice::Iter<'a, CompiledFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skim_types::lines_from;

    fn set(patterns: &[&str]) -> FilterSet {
        FilterSet::compile(patterns.iter().map(|p| FilterSpec::new(*p))).unwrap()
    }

    #[test]
    fn test_regex_filter() {
        let filter = CompiledFilter::new(FilterSpec::new("^ERROR")).unwrap();
        assert!(filter.matches("ERROR bad"));
        assert!(!filter.matches("INFO ERROR"));
    }

    #[test]
    fn test_first_match_wins() {
        let filters = set(&["a", "b"]);
        let found = filters.first_match("ab").unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.filter.pattern(), "a");

        assert_eq!(filters.first_match("b").unwrap().index, 1);
        assert!(filters.first_match("c").is_none());
    }

    #[test]
    fn test_disabled_filters_never_match() {
        let mut filters = set(&["x"]);
        assert!(filters.first_match("x").is_some());

        assert_eq!(filters.toggle(0), Some(false));
        assert!(filters.first_match("x").is_none());
    }

    #[test]
    fn test_disabled_filter_falls_through_to_next() {
        let mut filters = set(&["a", "b"]);
        filters.toggle(0);
        assert_eq!(filters.first_match("ab").unwrap().index, 1);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut filters = set(&["x"]);
        filters.toggle(0);
        filters.toggle(0);
        assert!(filters.get(0).unwrap().is_enabled());
        assert_eq!(filters.toggle(7), None);
    }

    #[test]
    fn test_compile_is_all_or_nothing() {
        let specs = vec![
            FilterSpec::new("ok"),
            FilterSpec::new("(unclosed").with_description("broken"),
            FilterSpec::new("also ok"),
        ];

        let err = FilterSet::compile(specs).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.label, "broken");
        assert_eq!(err.pattern, "(unclosed");
    }

    #[test]
    fn test_case_sensitivity() {
        let sensitive = CompiledFilter::new(FilterSpec::new("error")).unwrap();
        assert!(!sensitive.matches("ERROR"));

        let insensitive = CompiledFilter::new(FilterSpec::new("error").case_insensitive()).unwrap();
        assert!(insensitive.matches("ERROR"));
    }

    #[test]
    fn test_literal_patterns_are_escaped() {
        let literal = CompiledFilter::new(FilterSpec::new("a.b(").literal()).unwrap();
        assert!(literal.matches("xx a.b( yy"));
        assert!(!literal.matches("axb("));
    }

    #[test]
    fn test_excluding_inverts_match() {
        let filter = CompiledFilter::new(FilterSpec::new("heartbeat").excluding()).unwrap();
        assert!(!filter.matches("heartbeat ok"));
        assert!(filter.matches("request served"));
    }

    #[test]
    fn test_all_matches_reports_every_enabled_filter() {
        let mut filters = set(&["a", "b", "c", "ab"]);
        filters.toggle(1);

        let indices: Vec<usize> = filters.all_matches("abc").map(|m| m.index).collect();
        assert_eq!(indices, [0, 2, 3]);
        // Query does not mutate anything
        assert_eq!(filters.enabled_count(), 3);
    }

    #[test]
    fn test_matching_lines_scan() {
        let filters = set(&["^ERROR", "WARN"]);
        let lines = lines_from(["INFO start", "ERROR bad", "WARN slow", "INFO end"]);

        let matched: Vec<(usize, usize)> = filters
            .matching_lines(&lines)
            .map(|(line, m)| (line.index, m.index))
            .collect();
        assert_eq!(matched, [(1, 0), (2, 1)]);
    }
}
