use crate::dataset::Entry;

/// Result of matching a query against the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query was empty after trimming
    Blank,
    /// A label equals the query (case-insensitive)
    Exact(Entry),
    /// Labels containing the query, earliest match first
    Matches(Vec<Entry>),
}

pub struct LabelMatcher;

impl LabelMatcher {
    /// Normalize a typed query the way labels are compared
    pub fn normalize(query: &str) -> String {
        query.trim().to_lowercase()
    }

    /// Match `query` against `entries`
    ///
    /// An exact label match wins outright. Otherwise every entry whose
    /// lowercased label contains the query is kept and sorted by the
    /// character offset of the match; the sort is stable so dataset order
    /// breaks ties.
    pub fn search(entries: &[Entry], query: &str) -> SearchOutcome {
        let needle = Self::normalize(query);
        if needle.is_empty() {
            return SearchOutcome::Blank;
        }

        if let Some(exact) = entries.iter().find(|e| e.label.to_lowercase() == needle) {
            return SearchOutcome::Exact(exact.clone());
        }

        let mut matches: Vec<(usize, &Entry)> = entries
            .iter()
            .filter(|e| e.label.to_lowercase().contains(&needle))
            .map(|e| (Self::match_offset(&e.label, &needle).unwrap_or(0), e))
            .collect();

        matches.sort_by_key(|(offset, _)| *offset);

        SearchOutcome::Matches(matches.into_iter().map(|(_, e)| e.clone()).collect())
    }

    /// Character offset of `needle` within the trimmed, lowercased label
    pub fn match_offset(label: &str, needle: &str) -> Option<usize> {
        let haystack = label.trim().to_lowercase();
        haystack
            .find(needle)
            .map(|byte_pos| haystack[..byte_pos].chars().count())
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
