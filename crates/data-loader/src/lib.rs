//! # Data Loader Crate
//!
//! This crate loads and indexes the movie catalog the picker draws from.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Genre, AgeRating, CatalogIndex)
//! - **parser**: Parse the `::`-separated .dat files into Rust structs
//! - **index**: Build the lookup indices and validate the catalog
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::CatalogIndex;
//! use std::path::Path;
//!
//! let index = CatalogIndex::load_from_files(Path::new("data/catalog"))?;
//!
//! let movie = index.get_movie(603).unwrap();
//! let genres = index.genre_names_for(603);
//!
//! println!("{} ({:?}): {}", movie.title, movie.year, genres.join(", "));
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    MovieId,
    GenreId,
    // Core types
    Movie,
    Genre,
    CatalogIndex,
    // Enums
    AgeRating,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_index_creation() {
        let index = CatalogIndex::new();
        let (movies, genres, links) = index.counts();

        assert_eq!(movies, 0);
        assert_eq!(genres, 0);
        assert_eq!(links, 0);
    }

    #[test]
    fn test_insert_movie_upserts() {
        let mut index = CatalogIndex::new();

        let mut movie = Movie::new(13, "Forrest Gump");
        movie.year = Some(1994);
        index.insert_movie(movie.clone());

        movie.rating = Some(8.5);
        index.insert_movie(movie);

        let retrieved = index.get_movie(13).unwrap();
        assert_eq!(retrieved.year, Some(1994));
        assert_eq!(retrieved.rating, Some(8.5));
        assert_eq!(index.counts().0, 1);
    }

    #[test]
    fn test_insert_genre_keeps_first() {
        let mut index = CatalogIndex::new();

        index.insert_genre(Genre { id: 878, name: "Science Fiction".to_string() });
        index.insert_genre(Genre { id: 878, name: "Sci-Fi".to_string() });

        assert_eq!(index.get_genre(878).unwrap().name, "Science Fiction");
    }

    #[test]
    fn test_empty_queries() {
        let index = CatalogIndex::new();

        assert!(index.get_movie(999).is_none());
        assert!(index.genre_names_for(999).is_empty());
        assert!(index.get_movies_by_genre("Action").is_empty());
        assert!(index.movies_released_between(1970, 2024).is_empty());
        assert!(index.language_counts().is_empty());
        assert!(index.all_movie_ids().is_empty());
    }
}
