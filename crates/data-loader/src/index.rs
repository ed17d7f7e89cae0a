//! CatalogIndex building and indexing logic.
//!
//! This module builds the CatalogIndex from parsed data:
//! - Primary stores (movies, genres, genre links)
//! - Secondary indices (genre name and release year lookups)
//! - Integrity checks over the loaded catalog

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;

/// Highest rating on the catalog's scale
const MAX_RATING: f64 = 10.0;

impl CatalogIndex {
    /// Load the catalog from a directory holding movies.dat, genres.dat and
    /// movie_genres.dat.
    ///
    /// Steps:
    /// 1. Parse the three files in parallel
    /// 2. Build primary stores
    /// 3. Build secondary indices (genre, year)
    /// 4. Validate data integrity
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        let movies_path = data_dir.join("movies.dat");
        let genres_path = data_dir.join("genres.dat");
        let links_path = data_dir.join("movie_genres.dat");

        // Nested joins give three-way parallelism
        let ((movies, genres), links) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_movies(&movies_path),
                    || parser::parse_genres(&genres_path),
                )
            },
            || parser::parse_movie_genres(&links_path),
        );

        let movies = movies?;
        let genres = genres?;
        let links = links?;

        let mut index = CatalogIndex::new();

        for movie in movies {
            index.insert_movie(movie);
        }

        for genre in genres {
            index.insert_genre(genre);
        }

        for (movie_id, genre_id) in links {
            index.link_genre(movie_id, genre_id);
        }

        index.build_secondary_indices();
        index.validate()?;

        Ok(index)
    }

    /// Build secondary indices after primary data is loaded.
    ///
    /// Indices are rebuilt from scratch, so calling this again after an
    /// upsert never leaves duplicate ids behind.
    pub fn build_secondary_indices(&mut self) {
        self.genre_index.clear();
        self.year_index.clear();

        for (movie_id, genre_ids) in &self.movie_genres {
            if !self.movies.contains_key(movie_id) {
                continue;
            }
            for genre_id in genre_ids {
                if let Some(genre) = self.genres.get(genre_id) {
                    self.genre_index
                        .entry(genre.name.clone())
                        .or_default()
                        .push(*movie_id);
                }
            }
        }

        for (movie_id, movie) in &self.movies {
            if let Some(year) = movie.year {
                self.year_index.entry(year).or_default().push(*movie_id);
            }
        }

        // HashMap iteration order is arbitrary; keep the index lists stable
        for ids in self.genre_index.values_mut() {
            ids.sort_unstable();
            ids.dedup();
        }
        for ids in self.year_index.values_mut() {
            ids.sort_unstable();
        }
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every genre link references an existing movie and genre
    /// - Ratings lie within 0.0 - 10.0
    pub fn validate(&self) -> Result<()> {
        for (movie_id, genre_ids) in &self.movie_genres {
            if !self.movies.contains_key(movie_id) {
                return Err(DataLoadError::MissingReference {
                    entity: "Movie".to_string(),
                    id: *movie_id,
                });
            }
            for genre_id in genre_ids {
                if !self.genres.contains_key(genre_id) {
                    return Err(DataLoadError::MissingReference {
                        entity: "Genre".to_string(),
                        id: *genre_id,
                    });
                }
            }
        }

        for movie in self.movies.values() {
            if let Some(rating) = movie.rating {
                if !(0.0..=MAX_RATING).contains(&rating) {
                    return Err(DataLoadError::ValidationError(format!(
                        "Movie {} has rating {} outside 0-{}",
                        movie.id, rating, MAX_RATING
                    )));
                }
            }
        }
        Ok(())
    }
}
