//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible hard filters to be applied to catalog entries, and the
//! query they are evaluated against.

use crate::preferences::Preferences;
use anyhow::Result;
use data_loader::{Movie, MovieId};
use std::collections::HashSet;

/// Everything a candidate query is evaluated against.
///
/// `exclude_ids` is empty unless a caller asks to skip specific movies
/// (for example ones picked recently).
#[derive(Debug, Clone, Default)]
pub struct CandidateQuery {
    pub preferences: Preferences,
    pub exclude_ids: HashSet<MovieId>,
}

impl CandidateQuery {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences,
            exclude_ids: HashSet::new(),
        }
    }

    /// Skip these movies in addition to the preference filters
    pub fn excluding(mut self, ids: impl IntoIterator<Item = MovieId>) -> Self {
        self.exclude_ids.extend(ids);
        self
    }
}

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared by concurrent requests
/// - Filters take ownership of the Vec<Movie> and return a filtered Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `query` - Preferences and exclusions for this request
    ///
    /// # Returns
    /// * `Ok(Vec<Movie>)` - The candidates that satisfy this filter
    /// * `Err` - If filtering fails
    fn apply(&self, candidates: Vec<Movie>, query: &CandidateQuery) -> Result<Vec<Movie>>;
}
