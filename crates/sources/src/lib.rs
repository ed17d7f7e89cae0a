//! # Sources Crate
//!
//! Candidate stores: where the engine gets the movies that satisfy a
//! request's hard constraints.
//!
//! ## Components
//!
//! ### CandidateStore
//! The interface the engine depends on. Implementations must be
//! `Send + Sync` so one store can serve concurrent requests.
//!
//! ### CatalogStore
//! In-memory store over a loaded `CatalogIndex`. Uses the year index to
//! narrow the catalog, then applies the hard filter pipeline.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CandidateStore, CatalogStore};
//! use data_loader::CatalogIndex;
//! use pipeline::{CandidateQuery, Preferences};
//! use std::sync::Arc;
//!
//! let index = Arc::new(CatalogIndex::load_from_files(Path::new("data/catalog"))?);
//! let store = CatalogStore::new(index);
//!
//! let movies = store.fetch_candidates(&CandidateQuery::new(Preferences::default()))?;
//! ```

pub mod catalog;
pub mod types;

// Re-export commonly used types
pub use catalog::CatalogStore;
pub use types::{CandidateStore, StoreError};
