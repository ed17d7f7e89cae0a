//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::*;
use crate::traits::{CandidateQuery, Filter};
use anyhow::Result;
use data_loader::{CatalogIndex, Movie};
use std::sync::Arc;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(YearRangeFilter)
///     .add_filter(MinimumRatingFilter)
///     .add_filter(GenreMatchFilter::new(catalog.clone()));
///
/// let filtered = pipeline.apply(movies, &query)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The full conjunction of hard filters a candidate must pass:
    /// year, runtime, rating floor, language, age rating, genre (any-of)
    /// and explicit exclusions.
    pub fn hard_filters(catalog: Arc<CatalogIndex>) -> Self {
        Self::new()
            .add_filter(ExcludedFilter)
            .add_filter(YearRangeFilter)
            .add_filter(RuntimeRangeFilter)
            .add_filter(MinimumRatingFilter)
            .add_filter(LanguageFilter)
            .add_filter(AgeRatingFilter)
            .add_filter(GenreMatchFilter::new(catalog))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Stops early once nothing is left, since every later filter would
    /// return an empty list too.
    pub fn apply(&self, candidates: Vec<Movie>, query: &CandidateQuery) -> Result<Vec<Movie>> {
        let mut current = candidates;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
