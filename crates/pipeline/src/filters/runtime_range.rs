//! Filter on runtime.

use crate::traits::{CandidateQuery, Filter};
use anyhow::Result;
use data_loader::Movie;

/// Keeps candidates whose runtime (minutes) lies in the requested range.
/// Movies without a runtime are dropped.
pub struct RuntimeRangeFilter;

impl Filter for RuntimeRangeFilter {
    fn name(&self) -> &str {
        "RuntimeRangeFilter"
    }

    fn apply(&self, candidates: Vec<Movie>, query: &CandidateQuery) -> Result<Vec<Movie>> {
        let range = query.preferences.runtime_range();
        Ok(candidates
            .into_iter()
            .filter(|movie| {
                movie
                    .runtime
                    .is_some_and(|runtime| range.contains(i32::from(runtime)))
            })
            .collect())
    }
}
