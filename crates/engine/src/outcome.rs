//! The result of a pick request.

use data_loader::Movie;
use pipeline::ScoreComponents;
use serde::Serialize;

/// Returned when no catalog entry survives the hard filters.
pub const NO_MATCH_REASON: &str =
    "No movies match your filters. Try widening year/runtime, languages, or age ratings.";

/// The chosen movie with its genre names attached.
///
/// Serialises as the movie's own fields plus `genres`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickedMovie {
    #[serde(flatten)]
    pub movie: Movie,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pick {
    pub movie: PickedMovie,
    /// Weighted total the movie was drawn with
    pub score: f64,
    pub components: ScoreComponents,
}

/// Exactly one movie, or an explicit no-match.
///
/// An empty candidate set is an expected outcome, not an error, so it is
/// a variant here rather than an `Err`.
///
/// JSON form: `{"movie": {...}, "score": .., "components": {...}}` or
/// `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Pick(Pick),
    NoMatch {
        #[serde(rename = "error")]
        reason: String,
    },
}

impl Outcome {
    pub fn no_match() -> Self {
        Outcome::NoMatch {
            reason: NO_MATCH_REASON.to_string(),
        }
    }

    pub fn pick(&self) -> Option<&Pick> {
        match self {
            Outcome::Pick(pick) => Some(pick),
            Outcome::NoMatch { .. } => None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.pick().is_some()
    }
}
