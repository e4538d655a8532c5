//! Domain layer for the Reel movie catalogue.
//!
//! Pure logic only: record types, the validation rule table and evaluator,
//! origin allow-list checks and the shared error taxonomy. Storage lives in
//! `reel-db` and HTTP concerns in `reel-api`.

pub mod error;
pub mod movie;
pub mod origin;
pub mod types;
pub mod validation;
