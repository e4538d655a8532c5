//! Query parameter types for API handlers.

use serde::Deserialize;

/// `?genre=` filter for the movie listing.
#[derive(Debug, Default, Deserialize)]
pub struct GenreFilter {
    pub genre: Option<String>,
}

impl GenreFilter {
    /// The requested genre, treating an empty value as no filter.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}
