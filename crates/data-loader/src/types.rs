//! Core domain types for the movie catalog.
//!
//! This module defines the records the rest of the workspace works with:
//! - Type aliases for identifiers (MovieId, GenreId)
//! - The BBFC age-rating scale as an ordered enum
//! - Movie and Genre records
//! - CatalogIndex, the in-memory catalog with its lookup indices

use crate::error::DataLoadError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie (TMDB id in the shipped catalog)
pub type MovieId = u32;

/// Unique identifier for a genre
pub type GenreId = u32;

// =============================================================================
// Age Ratings
// =============================================================================

/// UK (BBFC) age ratings.
///
/// Variants are declared from most permissive to most restrictive, so the
/// derived `Ord` follows the classification scale: `U < PG < 12 < 12A < 15 < 18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeRating {
    #[serde(rename = "U")]
    U,
    #[serde(rename = "PG")]
    PG,
    #[serde(rename = "12")]
    Twelve,
    #[serde(rename = "12A")]
    TwelveA,
    #[serde(rename = "15")]
    Fifteen,
    #[serde(rename = "18")]
    Eighteen,
}

impl AgeRating {
    /// The full scale, in permissiveness order.
    pub const ALL: [AgeRating; 6] = [
        AgeRating::U,
        AgeRating::PG,
        AgeRating::Twelve,
        AgeRating::TwelveA,
        AgeRating::Fifteen,
        AgeRating::Eighteen,
    ];

    /// The label used on certificates ("U", "PG", "12", ...)
    pub fn label(self) -> &'static str {
        match self {
            AgeRating::U => "U",
            AgeRating::PG => "PG",
            AgeRating::Twelve => "12",
            AgeRating::TwelveA => "12A",
            AgeRating::Fifteen => "15",
            AgeRating::Eighteen => "18",
        }
    }

    /// Map a raw certification string onto the scale.
    ///
    /// Case and spaces are ignored ("12 a" -> 12A). Variants seen in the
    /// wild are matched by prefix, e.g. "PG-13" -> PG, "12A*" -> 12A.
    /// Returns `None` for anything that isn't a UK certification.
    pub fn normalise(raw: &str) -> Option<AgeRating> {
        let cert: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        if let Some(rating) = AgeRating::ALL.iter().find(|r| r.label() == cert) {
            return Some(*rating);
        }

        // Order matters: "12A" must be tried before "12"
        let prefixes = [
            ("12A", AgeRating::TwelveA),
            ("12", AgeRating::Twelve),
            ("PG", AgeRating::PG),
            ("U", AgeRating::U),
            ("18", AgeRating::Eighteen),
            ("15", AgeRating::Fifteen),
        ];
        prefixes
            .iter()
            .find(|(prefix, _)| cert.starts_with(prefix))
            .map(|(_, rating)| *rating)
    }

    /// Pick the most restrictive rating out of several certifications.
    pub fn most_restrictive(ratings: impl IntoIterator<Item = AgeRating>) -> Option<AgeRating> {
        ratings.into_iter().max()
    }
}

impl fmt::Display for AgeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeRating {
    type Err = DataLoadError;

    /// Strict parse: only the exact labels are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeRating::ALL
            .iter()
            .copied()
            .find(|r| r.label() == s.trim())
            .ok_or_else(|| DataLoadError::InvalidValue {
                field: "age_rating".to_string(),
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Movie and Genre
// =============================================================================

/// A catalog entry.
///
/// Every descriptive field except the title may be missing; the hard filters
/// and the scorer each define how a missing value is treated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Release year
    pub year: Option<u16>,
    /// Runtime in minutes
    pub runtime: Option<u16>,
    /// Original language code, lower case (e.g. "en", "ja")
    pub language: Option<String>,
    /// Average rating on a 0-10 scale
    pub rating: Option<f64>,
    pub age_rating: Option<AgeRating>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
}

impl Movie {
    /// A movie with only an id and a title; everything else missing.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: None,
            runtime: None,
            language: None,
            rating: None,
            age_rating: None,
            poster_path: None,
            overview: None,
        }
    }
}

/// A named genre
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

// =============================================================================
// CatalogIndex - The In-Memory Catalog
// =============================================================================

/// Holds the whole catalog and the indices used to query it.
///
/// Primary data is keyed by id; the genre and year indices are derived
/// from it by `build_secondary_indices` and must be rebuilt after mutation.
#[derive(Debug)]
pub struct CatalogIndex {
    // Primary data stores
    pub(crate) movies: HashMap<MovieId, Movie>,
    pub(crate) genres: HashMap<GenreId, Genre>,
    /// Genre links per movie (a set, so re-linking is a no-op)
    pub(crate) movie_genres: HashMap<MovieId, BTreeSet<GenreId>>,

    // Secondary indices
    /// Movies grouped by genre name
    pub(crate) genre_index: HashMap<String, Vec<MovieId>>,
    /// Movies grouped by release year (sorted by year)
    pub(crate) year_index: BTreeMap<u16, Vec<MovieId>>,
}

impl CatalogIndex {
    /// Creates a new, empty CatalogIndex
    pub fn new() -> Self {
        Self {
            movies: HashMap::new(),
            genres: HashMap::new(),
            movie_genres: HashMap::new(),
            genre_index: HashMap::new(),
            year_index: BTreeMap::new(),
        }
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Get a genre by ID
    pub fn get_genre(&self, id: GenreId) -> Option<&Genre> {
        self.genres.get(&id)
    }

    /// Names of the genres linked to a movie, sorted by name.
    ///
    /// Returns an empty list for unknown movies and movies without genres.
    pub fn genre_names_for(&self, movie_id: MovieId) -> Vec<String> {
        let mut names: Vec<String> = self
            .movie_genres
            .get(&movie_id)
            .into_iter()
            .flatten()
            .filter_map(|genre_id| self.genres.get(genre_id))
            .map(|genre| genre.name.clone())
            .collect();
        names.sort();
        names
    }

    /// Get all movies linked to the genre with this name
    pub fn get_movies_by_genre(&self, name: &str) -> &[MovieId] {
        self.genre_index
            .get(name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get all movies released in a specific year
    pub fn get_movies_by_year(&self, year: u16) -> &[MovieId] {
        self.year_index
            .get(&year)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Movies released within `[min_year, max_year]` (inclusive).
    ///
    /// Movies without a release year are never included. An empty list is
    /// returned when the range holds no representable year.
    pub fn movies_released_between(&self, min_year: i32, max_year: i32) -> Vec<MovieId> {
        let lo = min_year.clamp(0, i32::from(u16::MAX));
        let hi = max_year.clamp(0, i32::from(u16::MAX));
        if max_year < 0 || min_year > i32::from(u16::MAX) || lo > hi {
            return Vec::new();
        }
        // Both bounds were clamped into u16 range above
        let (lo, hi) = (lo as u16, hi as u16);
        self.year_index
            .range(lo..=hi)
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect()
    }

    /// All genre names, sorted
    pub fn genre_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.genres.values().map(|g| g.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Language codes with the number of movies in each, most frequent first.
    ///
    /// Blank codes are skipped. Ties are broken by code so the output is stable.
    pub fn language_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for language in self.movies.values().filter_map(|m| m.language.as_deref()) {
            let language = language.trim();
            if !language.is_empty() {
                *counts.entry(language).or_insert(0) += 1;
            }
        }
        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(code, n)| (code.to_string(), n))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    /// IDs of every movie in the catalog, sorted
    pub fn all_movie_ids(&self) -> Vec<MovieId> {
        let mut ids: Vec<MovieId> = self.movies.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    // Mutators - used while loading

    /// Insert a movie, replacing any existing entry with the same id
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    /// Insert a genre unless one with the same id already exists
    pub fn insert_genre(&mut self, genre: Genre) {
        self.genres.entry(genre.id).or_insert(genre);
    }

    /// Link a movie to a genre. Linking twice has no effect.
    pub fn link_genre(&mut self, movie_id: MovieId, genre_id: GenreId) {
        self.movie_genres
            .entry(movie_id)
            .or_default()
            .insert(genre_id);
    }

    /// Get counts for debugging/validation: (movies, genres, genre links)
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_links = self.movie_genres.values().map(|v| v.len()).sum();
        (self.movies.len(), self.genres.len(), total_links)
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::new()
    }
}
