//! The preference model for a single pick request.
//!
//! `Preferences` is an immutable value built once per request through
//! `PreferencesBuilder`, which is also where caller input is normalised:
//! inverted ranges are swapped, blank entries dropped, language codes
//! lower-cased and an empty age-rating set widened to the full scale.

use data_loader::AgeRating;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

/// Default release-year window
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (1970, 2024);

/// Default runtime window, in minutes
pub const DEFAULT_RUNTIME_RANGE: (i32, i32) = (80, 160);

/// Default rating floor (0-10 scale)
pub const DEFAULT_MIN_RATING: f64 = 7.0;

/// An inclusive integer range with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

impl Bounds {
    /// Build a range, swapping the ends if they arrive inverted
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }

    /// Width of the range, never less than 1
    pub fn span(&self) -> f64 {
        (f64::from(self.max) - f64::from(self.min)).max(1.0)
    }

    /// Triangular fit: 1.0 at the midpoint, falling linearly to 0.0 at the
    /// edges and staying there beyond them.
    ///
    /// A missing value is treated as sitting on the midpoint.
    pub fn fit(&self, value: Option<i32>) -> f64 {
        let mid = self.midpoint();
        let value = value.map(f64::from).unwrap_or(mid);
        1.0 - ((value - mid).abs() / (self.span() / 2.0)).min(1.0)
    }
}

/// The constraint set for one recommendation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    genres: BTreeSet<String>,
    year_range: Bounds,
    runtime_range: Bounds,
    languages: BTreeSet<String>,
    min_rating: f64,
    allowed_age_ratings: BTreeSet<AgeRating>,
}

impl Preferences {
    pub fn builder() -> PreferencesBuilder {
        PreferencesBuilder::default()
    }

    /// Preferred genres; empty means any genre
    pub fn genres(&self) -> &BTreeSet<String> {
        &self.genres
    }

    pub fn year_range(&self) -> Bounds {
        self.year_range
    }

    pub fn runtime_range(&self) -> Bounds {
        self.runtime_range
    }

    /// Accepted language codes; empty means any language
    pub fn languages(&self) -> &BTreeSet<String> {
        &self.languages
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// Accepted age ratings; never empty
    pub fn allowed_age_ratings(&self) -> &BTreeSet<AgeRating> {
        &self.allowed_age_ratings
    }
}

impl Default for Preferences {
    fn default() -> Self {
        PreferencesBuilder::default().build()
    }
}

/// Builder for `Preferences`. Every field starts at its default.
#[derive(Debug, Clone)]
pub struct PreferencesBuilder {
    genres: Vec<String>,
    year_range: (i32, i32),
    runtime_range: (i32, i32),
    languages: Vec<String>,
    min_rating: f64,
    allowed_age_ratings: Vec<AgeRating>,
}

impl Default for PreferencesBuilder {
    fn default() -> Self {
        Self {
            genres: Vec::new(),
            year_range: DEFAULT_YEAR_RANGE,
            runtime_range: DEFAULT_RUNTIME_RANGE,
            languages: Vec::new(),
            min_rating: DEFAULT_MIN_RATING,
            allowed_age_ratings: Vec::new(),
        }
    }
}

impl PreferencesBuilder {
    pub fn genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn year_range(mut self, min: i32, max: i32) -> Self {
        self.year_range = (min, max);
        self
    }

    pub fn runtime_range(mut self, min: i32, max: i32) -> Self {
        self.runtime_range = (min, max);
        self
    }

    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn allowed_age_ratings(mut self, ratings: impl IntoIterator<Item = AgeRating>) -> Self {
        self.allowed_age_ratings = ratings.into_iter().collect();
        self
    }

    pub fn build(self) -> Preferences {
        let genres = self
            .genres
            .iter()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect();

        let languages = self
            .languages
            .iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        let min_rating = if self.min_rating.is_finite() {
            self.min_rating
        } else {
            warn!(min_rating = self.min_rating, "Non-finite rating floor, using default");
            DEFAULT_MIN_RATING
        };

        let allowed_age_ratings: BTreeSet<AgeRating> = if self.allowed_age_ratings.is_empty() {
            AgeRating::ALL.into_iter().collect()
        } else {
            self.allowed_age_ratings.into_iter().collect()
        };

        Preferences {
            genres,
            year_range: normalise_range("year", self.year_range),
            runtime_range: normalise_range("runtime", self.runtime_range),
            languages,
            min_rating,
            allowed_age_ratings,
        }
    }
}

fn normalise_range(name: &str, (min, max): (i32, i32)) -> Bounds {
    if min > max {
        warn!(range = name, min, max, "Inverted range, swapping bounds");
    }
    Bounds::new(min, max)
}

/// Request body for a pick, as sent by JSON clients.
///
/// Every field is optional; missing fields take the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesPayload {
    pub genres: Vec<String>,
    pub year_range: Option<(i32, i32)>,
    pub runtime_range: Option<(i32, i32)>,
    pub languages: Vec<String>,
    pub min_rating: Option<f64>,
    pub allowed_age_ratings: Vec<AgeRating>,
}

impl From<PreferencesPayload> for Preferences {
    fn from(payload: PreferencesPayload) -> Self {
        let (year_min, year_max) = payload.year_range.unwrap_or(DEFAULT_YEAR_RANGE);
        let (runtime_min, runtime_max) = payload.runtime_range.unwrap_or(DEFAULT_RUNTIME_RANGE);

        Preferences::builder()
            .genres(payload.genres)
            .year_range(year_min, year_max)
            .runtime_range(runtime_min, runtime_max)
            .languages(payload.languages)
            .min_rating(payload.min_rating.unwrap_or(DEFAULT_MIN_RATING))
            .allowed_age_ratings(payload.allowed_age_ratings)
            .build()
    }
}
