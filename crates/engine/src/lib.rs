//! Engine crate for the reel-pick movie recommender.
//!
//! This crate contains the orchestrator that turns a set of preferences
//! into exactly one movie (or an explicit no-match) by composing a
//! candidate store, the scorer and the weighted selector.

pub mod orchestrator;
pub mod outcome;

pub use orchestrator::MoviePicker;
pub use outcome::{Outcome, Pick, PickedMovie, NO_MATCH_REASON};
