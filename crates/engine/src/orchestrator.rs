//! # Pick Orchestrator
//!
//! This module coordinates a single pick request:
//! 1. Fetch candidates from the store (on the blocking pool)
//! 2. Return a no-match outcome if nothing survives the hard filters
//! 3. Score every candidate
//! 4. Draw one candidate with probability proportional to its score
//! 5. Look up the winner's genres and build the outcome
//!
//! Store failures are returned to the caller with context attached. There
//! are no retries at this layer.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::outcome::{Outcome, Pick, PickedMovie};
use data_loader::{Movie, MovieId};
use pipeline::{select_weighted, CandidateQuery, Preferences, Scorer};
use sources::CandidateStore;

/// Picks one movie per request from a candidate store.
///
/// Holds no per-request state, so one picker can serve concurrent requests.
#[derive(Clone)]
pub struct MoviePicker {
    store: Arc<dyn CandidateStore>,
    scorer: Scorer,
}

impl MoviePicker {
    pub fn new(store: Arc<dyn CandidateStore>) -> Self {
        Self {
            store,
            scorer: Scorer::new(),
        }
    }

    /// Pick a movie using a freshly seeded random source.
    pub async fn pick_movie(&self, preferences: &Preferences) -> Result<Outcome> {
        let mut rng = StdRng::from_os_rng();
        self.pick_movie_with(preferences, HashSet::new(), &mut rng).await
    }

    /// Pick a movie, skipping `exclude_ids` and drawing from `rng`.
    ///
    /// # Returns
    /// * `Ok(Outcome::Pick)` - One movie with its score and components
    /// * `Ok(Outcome::NoMatch)` - Nothing satisfied the hard filters
    /// * `Err` - The candidate store failed
    pub async fn pick_movie_with<R: Rng + ?Sized>(
        &self,
        preferences: &Preferences,
        exclude_ids: HashSet<MovieId>,
        rng: &mut R,
    ) -> Result<Outcome> {
        let start_time = Instant::now();

        let query = CandidateQuery::new(preferences.clone()).excluding(exclude_ids);
        let mut candidates = self.fetch_candidates(query).await?;
        info!(
            "Store '{}' returned {} candidates",
            self.store.name(),
            candidates.len()
        );

        if candidates.is_empty() {
            info!("No candidates matched, elapsed {:.2?}", start_time.elapsed());
            return Ok(Outcome::no_match());
        }

        let scores = self.scorer.score_all(&candidates, preferences);
        let weights: Vec<f64> = scores.iter().map(|s| s.total).collect();
        debug!("Scored {} candidates", scores.len());

        let index = select_weighted(&weights, rng)
            .context("Selector returned nothing for a non-empty candidate list")?;
        let breakdown = scores[index];
        let movie = candidates.swap_remove(index);

        let genres = self.genres_for(movie.id).await?;

        info!(
            "Picked movie {} '{}' (score {:.3}) from {} candidates in {:.2?}",
            movie.id,
            movie.title,
            breakdown.total,
            weights.len(),
            start_time.elapsed()
        );

        Ok(Outcome::Pick(Pick {
            movie: PickedMovie { movie, genres },
            score: breakdown.total,
            components: breakdown.components(),
        }))
    }

    /// Run the store query on the blocking pool
    async fn fetch_candidates(&self, query: CandidateQuery) -> Result<Vec<Movie>> {
        let store = self.store.clone();
        let name = store.name().to_string();

        tokio::task::spawn_blocking(move || store.fetch_candidates(&query))
            .await
            .context("Candidate store task panicked")?
            .with_context(|| format!("Candidate store '{}' failed to fetch candidates", name))
    }

    /// Secondary genre lookup for the chosen movie
    async fn genres_for(&self, movie_id: MovieId) -> Result<Vec<String>> {
        let store = self.store.clone();

        tokio::task::spawn_blocking(move || store.genres_for(movie_id))
            .await
            .context("Genre lookup task panicked")?
            .with_context(|| format!("Failed to look up genres for movie {}", movie_id))
    }
}
