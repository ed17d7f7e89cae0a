//! Filter on BBFC age rating.

use crate::traits::{CandidateQuery, Filter};
use anyhow::Result;
use data_loader::Movie;

/// Keeps candidates certified with one of the allowed age ratings.
/// Uncertified movies are dropped.
pub struct AgeRatingFilter;

impl Filter for AgeRatingFilter {
    fn name(&self) -> &str {
        "AgeRatingFilter"
    }

    fn apply(&self, candidates: Vec<Movie>, query: &CandidateQuery) -> Result<Vec<Movie>> {
        let allowed = query.preferences.allowed_age_ratings();
        Ok(candidates
            .into_iter()
            .filter(|movie| movie.age_rating.is_some_and(|rating| allowed.contains(&rating)))
            .collect())
    }
}
