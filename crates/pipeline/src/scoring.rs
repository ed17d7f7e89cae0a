//! Scoring of candidates against a user's preferences.
//!
//! The score is a fixed weighted blend of four components:
//!
//! | component     | weight | value                                   |
//! |---------------|--------|-----------------------------------------|
//! | `rating`      | 0.50   | catalog rating / 10                     |
//! | `year_fit`    | 0.20   | triangular fit inside the year range    |
//! | `runtime_fit` | 0.15   | triangular fit inside the runtime range |
//! | `genre_bonus` | 0.15   | constant 0.15                           |
//!
//! Scores only weight the random draw; they never exclude a candidate.

use crate::preferences::Preferences;
use data_loader::Movie;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub const RATING_WEIGHT: f64 = 0.5;
pub const YEAR_WEIGHT: f64 = 0.2;
pub const RUNTIME_WEIGHT: f64 = 0.15;
pub const GENRE_WEIGHT: f64 = 0.15;

/// Flat bonus every candidate receives. Candidates already passed the
/// genre filter, so overlap is not measured here.
pub const GENRE_BONUS: f64 = 0.15;

/// Highest rating on the catalog's scale
const MAX_RATING: f64 = 10.0;

/// The four score components, without the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub rating: f64,
    pub year_fit: f64,
    pub runtime_fit: f64,
    pub genre_bonus: f64,
}

/// Score components plus their weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub rating: f64,
    pub year_fit: f64,
    pub runtime_fit: f64,
    pub genre_bonus: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    fn from_components(components: ScoreComponents) -> Self {
        let total = components.rating * RATING_WEIGHT
            + components.year_fit * YEAR_WEIGHT
            + components.runtime_fit * RUNTIME_WEIGHT
            + components.genre_bonus * GENRE_WEIGHT;

        Self {
            rating: components.rating,
            year_fit: components.year_fit,
            runtime_fit: components.runtime_fit,
            genre_bonus: components.genre_bonus,
            total,
        }
    }

    /// Everything except the total
    pub fn components(&self) -> ScoreComponents {
        ScoreComponents {
            rating: self.rating,
            year_fit: self.year_fit,
            runtime_fit: self.runtime_fit,
            genre_bonus: self.genre_bonus,
        }
    }
}

/// Scores candidates. Pure: no I/O and no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer;

impl Scorer {
    pub fn new() -> Self {
        Self
    }

    /// Score one candidate.
    ///
    /// Missing year or runtime counts as a perfect fit (the midpoint of the
    /// range); a missing rating counts as 0.
    pub fn score(&self, movie: &Movie, preferences: &Preferences) -> ScoreBreakdown {
        let rating = movie.rating.unwrap_or(0.0) / MAX_RATING;
        let year_fit = preferences.year_range().fit(movie.year.map(i32::from));
        let runtime_fit = preferences.runtime_range().fit(movie.runtime.map(i32::from));

        ScoreBreakdown::from_components(ScoreComponents {
            rating,
            year_fit,
            runtime_fit,
            genre_bonus: GENRE_BONUS,
        })
    }

    /// Score all candidates in parallel.
    ///
    /// # Returns
    /// One breakdown per candidate, in the same order
    pub fn score_all(&self, movies: &[Movie], preferences: &Preferences) -> Vec<ScoreBreakdown> {
        movies
            .par_iter()
            .map(|movie| self.score(movie, preferences))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn prefs() -> Preferences {
        Preferences::builder()
            .year_range(1990, 2010)
            .runtime_range(100, 140)
            .build()
    }

    fn movie(year: Option<u16>, runtime: Option<u16>, rating: Option<f64>) -> Movie {
        Movie {
            year,
            runtime,
            rating,
            ..Movie::new(1, "Test")
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum = RATING_WEIGHT + YEAR_WEIGHT + RUNTIME_WEIGHT + GENRE_WEIGHT;
        assert!((sum - 1.0).abs() < EPS);
    }

    #[test]
    fn test_midpoint_is_optimal() {
        let breakdown = Scorer.score(&movie(Some(2000), Some(120), Some(8.0)), &prefs());

        assert_eq!(breakdown.year_fit, 1.0);
        assert_eq!(breakdown.runtime_fit, 1.0);
        assert!((breakdown.rating - 0.8).abs() < EPS);
        assert_eq!(breakdown.genre_bonus, 0.15);

        let expected = 0.5 * 0.8 + 0.2 + 0.15 + 0.15 * 0.15;
        assert!((breakdown.total - expected).abs() < EPS);
    }

    #[test]
    fn test_missing_fields_are_neutral() {
        let breakdown = Scorer.score(&movie(None, None, None), &prefs());

        assert_eq!(breakdown.rating, 0.0);
        assert_eq!(breakdown.year_fit, 1.0);
        assert_eq!(breakdown.runtime_fit, 1.0);
    }

    #[test]
    fn test_fit_falls_off_towards_edges() {
        let breakdown = Scorer.score(&movie(Some(2005), Some(100), Some(10.0)), &prefs());

        assert!((breakdown.year_fit - 0.5).abs() < EPS);
        assert_eq!(breakdown.runtime_fit, 0.0);
        assert_eq!(breakdown.rating, 1.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let m = movie(Some(1997), Some(131), Some(7.3));
        let first = Scorer.score(&m, &prefs());
        for _ in 0..10 {
            assert_eq!(Scorer.score(&m, &prefs()), first);
        }
    }

    #[test]
    fn test_components_stay_in_bounds() {
        let preferences = [
            prefs(),
            Preferences::default(),
            Preferences::builder().year_range(2000, 2000).runtime_range(90, 90).build(),
        ];
        let years = [None, Some(0), Some(1950), Some(1990), Some(2000), Some(2024), Some(3000)];
        let runtimes = [None, Some(0), Some(90), Some(120), Some(400)];
        let ratings = [None, Some(0.0), Some(5.5), Some(10.0)];

        for p in &preferences {
            for &year in &years {
                for &runtime in &runtimes {
                    for &rating in &ratings {
                        let b = Scorer.score(&movie(year, runtime, rating), p);
                        for value in [b.rating, b.year_fit, b.runtime_fit, b.total] {
                            assert!((0.0..=1.0).contains(&value), "{:?}", b);
                        }
                        assert_eq!(b.genre_bonus, GENRE_BONUS);
                    }
                }
            }
        }
    }

    #[test]
    fn test_score_all_preserves_order() {
        let movies = vec![
            movie(Some(2000), Some(120), Some(9.0)),
            movie(Some(1990), Some(100), Some(2.0)),
        ];
        let scores = Scorer.score_all(&movies, &prefs());

        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0], Scorer.score(&movies[0], &prefs()));
        assert!(scores[0].total > scores[1].total);
    }

    #[test]
    fn test_components_drop_total() {
        let breakdown = Scorer.score(&movie(Some(2000), Some(120), Some(8.0)), &prefs());
        let components = breakdown.components();

        assert_eq!(components.rating, breakdown.rating);
        assert_eq!(components.genre_bonus, GENRE_BONUS);
    }
}
