//! Hard filter implementations for candidate retrieval.
//!
//! Each filter checks one predicate; the FilterPipeline applies them as a
//! conjunction. A record missing the field a filter checks does not pass
//! that filter, except where noted.

pub mod age_rating;
pub mod excluded;
pub mod genre_match;
pub mod language;
pub mod minimum_rating;
pub mod runtime_range;
pub mod year_range;

// Re-export for convenience
pub use age_rating::AgeRatingFilter;
pub use excluded::ExcludedFilter;
pub use genre_match::GenreMatchFilter;
pub use language::LanguageFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use runtime_range::RuntimeRangeFilter;
pub use year_range::YearRangeFilter;

#[cfg(test)]
pub(crate) mod test_support {
    use data_loader::{AgeRating, Movie, MovieId};

    /// A fully populated movie that passes the default preferences
    pub fn movie(id: MovieId) -> Movie {
        Movie {
            year: Some(2000),
            runtime: Some(120),
            language: Some("en".to_string()),
            rating: Some(8.0),
            age_rating: Some(AgeRating::Fifteen),
            ..Movie::new(id, format!("Movie {}", id))
        }
    }

    pub fn ids(movies: &[Movie]) -> Vec<MovieId> {
        movies.iter().map(|m| m.id).collect()
    }
}
