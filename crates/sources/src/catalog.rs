//! In-memory candidate store backed by a loaded catalog.
//!
//! ## Algorithm
//! 1. Narrow to movies released inside the year range via the year index
//! 2. Clone those records out of the catalog
//! 3. Run the hard filter pipeline over them

use crate::types::{CandidateStore, StoreError};
use data_loader::{CatalogIndex, Movie, MovieId};
use pipeline::{CandidateQuery, FilterPipeline};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct CatalogStore {
    /// Shared, read-only catalog
    index: Arc<CatalogIndex>,

    filters: FilterPipeline,
}

impl CatalogStore {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        let filters = FilterPipeline::hard_filters(index.clone());
        Self { index, filters }
    }
}

impl CandidateStore for CatalogStore {
    fn name(&self) -> &str {
        "catalog"
    }

    #[instrument(skip(self, query), fields(exclusions = query.exclude_ids.len()))]
    fn fetch_candidates(&self, query: &CandidateQuery) -> Result<Vec<Movie>, StoreError> {
        let years = query.preferences.year_range();
        let mut seen = HashSet::new();

        let narrowed: Vec<Movie> = self
            .index
            .movies_released_between(years.min, years.max)
            .into_iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.index.get_movie(id).cloned())
            .collect();
        debug!("Year index narrowed catalog to {} movies", narrowed.len());

        let candidates = self
            .filters
            .apply(narrowed, query)
            .map_err(|e| StoreError::Query(format!("{:#}", e)))?;

        debug!("Fetched {} candidates", candidates.len());
        Ok(candidates)
    }

    fn genres_for(&self, movie_id: MovieId) -> Result<Vec<String>, StoreError> {
        if self.index.get_movie(movie_id).is_none() {
            return Err(StoreError::UnknownMovie(movie_id));
        }
        Ok(self.index.genre_names_for(movie_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{AgeRating, Genre};
    use pipeline::Preferences;

    fn movie(id: MovieId, year: u16, rating: f64) -> Movie {
        Movie {
            year: Some(year),
            runtime: Some(120),
            language: Some("en".to_string()),
            rating: Some(rating),
            age_rating: Some(AgeRating::PG),
            ..Movie::new(id, format!("Movie {}", id))
        }
    }

    fn create_store() -> CatalogStore {
        let mut index = CatalogIndex::new();
        index.insert_movie(movie(1, 1985, 8.1));
        index.insert_movie(movie(2, 1999, 7.4));
        index.insert_movie(movie(3, 2008, 6.2));
        index.insert_movie(movie(4, 2015, 9.0));

        index.insert_genre(Genre { id: 35, name: "Comedy".to_string() });
        index.insert_genre(Genre { id: 27, name: "Horror".to_string() });
        index.link_genre(1, 35);
        index.link_genre(2, 27);
        index.link_genre(2, 35);
        index.link_genre(4, 27);

        index.build_secondary_indices();
        CatalogStore::new(Arc::new(index))
    }

    fn sorted_ids(movies: &[Movie]) -> Vec<MovieId> {
        let mut ids: Vec<MovieId> = movies.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_fetch_respects_year_and_rating() {
        let store = create_store();
        let prefs = Preferences::builder().year_range(1990, 2020).build();

        let movies = store.fetch_candidates(&CandidateQuery::new(prefs)).unwrap();
        assert_eq!(sorted_ids(&movies), vec![2, 4]);
    }

    #[test]
    fn test_fetch_by_genre() {
        let store = create_store();
        let prefs = Preferences::builder()
            .year_range(1980, 2020)
            .genres(["Comedy"])
            .build();

        let movies = store.fetch_candidates(&CandidateQuery::new(prefs)).unwrap();
        assert_eq!(sorted_ids(&movies), vec![1, 2]);
    }

    #[test]
    fn test_fetch_with_exclusions() {
        let store = create_store();
        let prefs = Preferences::builder().year_range(1980, 2020).build();

        let query = CandidateQuery::new(prefs).excluding([1, 4]);
        let movies = store.fetch_candidates(&query).unwrap();
        assert_eq!(sorted_ids(&movies), vec![2]);
    }

    #[test]
    fn test_fetch_nothing_matches() {
        let store = create_store();
        let prefs = Preferences::builder().year_range(1900, 1950).build();

        let movies = store.fetch_candidates(&CandidateQuery::new(prefs)).unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn test_genres_for() {
        let store = create_store();

        assert_eq!(store.genres_for(2).unwrap(), vec!["Comedy", "Horror"]);
        assert!(store.genres_for(3).unwrap().is_empty());
        assert!(matches!(
            store.genres_for(42),
            Err(StoreError::UnknownMovie(42))
        ));
    }
}
