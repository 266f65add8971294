use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::repository::Contributor;

/// Fuzzy search over usernames and display names
pub struct ContributorMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for ContributorMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContributorMatcher").finish_non_exhaustive()
    }
}

impl Default for ContributorMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ContributorMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// True when every whitespace-separated term matches the contributor.
    ///
    /// A blank query matches everyone.
    pub fn matches(&self, query: &str, contributor: &Contributor) -> bool {
        let haystack = match &contributor.name {
            Some(name) => format!("{} {}", contributor.username, name),
            None => contributor.username.clone(),
        };

        query
            .split_whitespace()
            .all(|term| self.matcher.fuzzy_match(&haystack, term).is_some())
    }
}
