use crate::model::Recipe;
use regex::{Regex, RegexBuilder};

/// A compiled, case-insensitive literal matcher for one search query.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    needle: String,
    matcher: Regex,
}

impl SearchQuery {
    /// Compiles a query. Returns `None` when the query is blank after
    /// trimming, which callers treat as "match everything".
    pub fn parse(query: &str) -> Option<Self> {
        let needle = query.trim();
        if needle.is_empty() {
            return None;
        }

        // The pattern is escaped, so building only fails on the size limit.
        // A query that large degrades to no filtering at all.
        let matcher = RegexBuilder::new(&regex::escape(needle))
            .case_insensitive(true)
            .build()
            .ok()?;

        Some(SearchQuery {
            needle: needle.to_string(),
            matcher,
        })
    }

    /// The trimmed query text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.matcher.is_match(haystack)
    }

    /// True if the title, the description or any ingredient contains the
    /// query.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        recipe.searchable_text().any(|text| self.is_match(text))
    }
}
