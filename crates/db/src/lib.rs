//! In-memory storage for movie records.
//!
//! The store lives for the lifetime of the process and is seeded at
//! startup. Handlers reach it only through [`repositories::MovieRepo`].

use std::sync::Arc;

use reel_core::movie::Movie;
use tokio::sync::RwLock;

pub mod repositories;
pub mod seed;
pub mod store;

pub use seed::SeedError;
pub use store::MovieStore;

/// Shared handle to the movie store.
pub type DbPool = Arc<RwLock<MovieStore>>;

/// Create a store handle initialised with `movies`.
///
/// Fails if two seed records share an id.
pub fn create_pool(movies: Vec<Movie>) -> Result<DbPool, SeedError> {
    let store = MovieStore::from_seed(movies)?;
    Ok(Arc::new(RwLock::new(store)))
}
