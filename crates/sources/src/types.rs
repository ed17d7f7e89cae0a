//! The candidate store interface.

use data_loader::{Movie, MovieId};
use pipeline::CandidateQuery;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Candidate store unavailable: {0}")]
    Unavailable(String),

    #[error("Candidate query failed: {0}")]
    Query(String),

    #[error("Unknown movie: {0}")]
    UnknownMovie(MovieId),
}

/// Read-only access to the catalog for a pick request.
///
/// Implementations are shared between concurrent requests and are called
/// from blocking worker threads.
pub trait CandidateStore: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// All movies satisfying every hard constraint in `query`, unique by id.
    /// Order is not significant.
    fn fetch_candidates(&self, query: &CandidateQuery) -> Result<Vec<Movie>, StoreError>;

    /// Genre names linked to a movie. Empty when the movie has none.
    fn genres_for(&self, movie_id: MovieId) -> Result<Vec<String>, StoreError>;
}
