//! Filter on release year.

use crate::traits::{CandidateQuery, Filter};
use anyhow::Result;
use data_loader::Movie;

/// Keeps candidates released within the requested year range (inclusive).
/// Movies without a release year are dropped.
pub struct YearRangeFilter;

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn apply(&self, candidates: Vec<Movie>, query: &CandidateQuery) -> Result<Vec<Movie>> {
        let range = query.preferences.year_range();
        Ok(candidates
            .into_iter()
            .filter(|movie| movie.year.is_some_and(|year| range.contains(i32::from(year))))
            .collect())
    }
}
