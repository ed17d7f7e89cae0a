//! Filter to ensure a minimum quality threshold.
//!
//! Removes movies rated below the requested floor, so only content the
//! user considers good enough is ever drawn.

use crate::traits::{CandidateQuery, Filter};
use anyhow::Result;
use data_loader::Movie;

/// Removes candidates below the rating floor.
///
/// ## Algorithm
/// For each candidate:
/// 1. Read the catalog rating
/// 2. Keep it only if rating >= min_rating (inclusive)
/// 3. Unrated movies never pass
pub struct MinimumRatingFilter;

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, candidates: Vec<Movie>, query: &CandidateQuery) -> Result<Vec<Movie>> {
        let min_rating = query.preferences.min_rating();
        let filtered: Vec<Movie> = candidates
            .into_iter()
            .filter(|movie| movie.rating.is_some_and(|rating| rating >= min_rating))
            .collect();

        Ok(filtered)
    }
}
