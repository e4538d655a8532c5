//! Seed data loading.
//!
//! The default catalogue is embedded at compile time; an alternative JSON
//! file with the same shape can be supplied at startup.

use std::path::{Path, PathBuf};

use reel_core::movie::Movie;

const EMBEDDED_SEED: &str = include_str!("../seed/movies.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid seed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate movie id in seed data: {0}")]
    DuplicateId(String),
}

/// Parse a JSON array of movie records.
pub fn parse(json: &str) -> Result<Vec<Movie>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// The catalogue compiled into the binary.
pub fn embedded() -> Result<Vec<Movie>, SeedError> {
    parse(EMBEDDED_SEED)
}

/// Load seed records from a JSON file on disk.
pub fn load_from_path(path: &Path) -> Result<Vec<Movie>, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&json)
}
