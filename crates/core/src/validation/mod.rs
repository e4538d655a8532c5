//! Movie payload validation.
//!
//! A static per-field rule table ([`rules::MOVIE_RULES`]) and a pure
//! evaluator that checks a JSON payload against it in full (create) or
//! partial (update) mode.

pub mod evaluator;
pub mod rules;

pub use evaluator::{validate_movie, validate_partial_movie};
