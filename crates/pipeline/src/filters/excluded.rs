//! Filter to remove explicitly excluded movies.
//!
//! Lets a caller skip titles it has already shown (for example recent
//! picks). With an empty exclusion set it is a no-op.

use crate::traits::{CandidateQuery, Filter};
use anyhow::Result;
use data_loader::Movie;

/// Removes candidates listed in `CandidateQuery::exclude_ids`.
///
/// ## Algorithm
/// Uses the HashSet in the query for O(1) lookups.
pub struct ExcludedFilter;

impl Filter for ExcludedFilter {
    fn name(&self) -> &str {
        "ExcludedFilter"
    }

    fn apply(&self, candidates: Vec<Movie>, query: &CandidateQuery) -> Result<Vec<Movie>> {
        if query.exclude_ids.is_empty() {
            return Ok(candidates);
        }

        let filtered: Vec<Movie> = candidates
            .into_iter()
            .filter(|movie| !query.exclude_ids.contains(&movie.id))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{ids, movie};
    use crate::preferences::Preferences;

    #[test]
    fn test_excluded_filter() {
        let query = CandidateQuery::new(Preferences::default()).excluding([100, 200]);

        let candidates = vec![movie(100), movie(101), movie(200), movie(300)];
        let filtered = ExcludedFilter.apply(candidates, &query).unwrap();

        assert_eq!(ids(&filtered), vec![101, 300]);
    }

    #[test]
    fn test_no_exclusions_is_noop() {
        let query = CandidateQuery::new(Preferences::default());
        let filtered = ExcludedFilter.apply(vec![movie(1), movie(2)], &query).unwrap();
        assert_eq!(ids(&filtered), vec![1, 2]);
    }
}
