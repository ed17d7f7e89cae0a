//! Filter to keep only movies in one of the requested genres.
//!
//! Genre links live in the catalog rather than on the movie record, so
//! this filter holds a shared reference to the CatalogIndex.

use crate::traits::{CandidateQuery, Filter};
use anyhow::Result;
use data_loader::{CatalogIndex, Movie, MovieId};
use std::collections::HashSet;
use std::sync::Arc;

/// Keeps candidates linked to at least one requested genre (any-of).
///
/// ## Algorithm
/// 1. Skip entirely when no genres are requested
/// 2. Union the genre index lists of every requested genre
/// 3. Keep candidates whose id is in that union
pub struct GenreMatchFilter {
    catalog: Arc<CatalogIndex>,
}

impl GenreMatchFilter {
    /// Create a new GenreMatchFilter.
    ///
    /// # Arguments
    /// * `catalog` - Shared reference to the CatalogIndex for genre lookups
    pub fn new(catalog: Arc<CatalogIndex>) -> Self {
        Self { catalog }
    }
}

impl Filter for GenreMatchFilter {
    fn name(&self) -> &str {
        "GenreMatchFilter"
    }

    fn apply(&self, candidates: Vec<Movie>, query: &CandidateQuery) -> Result<Vec<Movie>> {
        let genres = query.preferences.genres();
        if genres.is_empty() {
            return Ok(candidates);
        }

        let matching: HashSet<MovieId> = genres
            .iter()
            .flat_map(|genre| self.catalog.get_movies_by_genre(genre).iter().copied())
            .collect();

        let filtered: Vec<Movie> = candidates
            .into_iter()
            .filter(|movie| matching.contains(&movie.id))
            .collect();
        Ok(filtered)
    }
}
