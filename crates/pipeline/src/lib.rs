//! Preferences, filtering, scoring and selection of movie candidates.
//!
//! This crate provides:
//! - `Preferences`, the immutable constraint set for one request
//! - Filter trait and the hard filters that implement the preferences
//! - FilterPipeline for composing filters
//! - `Scorer` for the weighted suitability score
//! - `select_weighted` for the score-proportional random draw
//!
//! ## Architecture
//! A pick request flows through these stages:
//! 1. Filters remove candidates that violate a preference
//! 2. Scorer rates every survivor in [0, 1]
//! 3. One survivor is drawn with probability proportional to its score
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{CandidateQuery, FilterPipeline, Preferences, Scorer, select_weighted};
//!
//! let prefs = Preferences::builder()
//!     .genres(["Science Fiction"])
//!     .year_range(1990, 2010)
//!     .build();
//!
//! let pipeline = FilterPipeline::hard_filters(index.clone());
//! let candidates = pipeline.apply(movies, &CandidateQuery::new(prefs.clone()))?;
//!
//! let scores = Scorer::new().score_all(&candidates, &prefs);
//! let weights: Vec<f64> = scores.iter().map(|s| s.total).collect();
//! let chosen = select_weighted(&weights, &mut rand::rng());
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod preferences;
pub mod scoring;
pub mod selection;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use preferences::{Bounds, Preferences, PreferencesBuilder, PreferencesPayload};
pub use scoring::{ScoreBreakdown, ScoreComponents, Scorer};
pub use selection::select_weighted;
pub use traits::{CandidateQuery, Filter};
