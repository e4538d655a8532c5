//! The record store: an ordered sequence of movies.
//!
//! Plain data structure with no locking; [`crate::DbPool`] wraps it in a
//! `RwLock` and [`crate::repositories::MovieRepo`] is the only writer.

use std::collections::HashSet;

use reel_core::movie::{Movie, MoviePatch};

use crate::seed::SeedError;

#[derive(Debug, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Build a store from seed records, rejecting duplicate ids.
    pub fn from_seed(movies: Vec<Movie>) -> Result<Self, SeedError> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(movie.id.as_str()) {
                return Err(SeedError::DuplicateId(movie.id.clone()));
            }
        }
        Ok(Self { movies })
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All records in insertion order, or only those carrying `genre`
    /// (case-insensitive) when a filter is given.
    pub fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        match genre {
            Some(genre) => self
                .movies
                .iter()
                .filter(|m| m.has_genre(genre))
                .cloned()
                .collect(),
            None => self.movies.clone(),
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Append a record. The caller guarantees its id is not already present.
    pub fn append(&mut self, movie: Movie) -> &Movie {
        self.movies.push(movie);
        &self.movies[self.movies.len() - 1]
    }

    /// Remove the first record with `id`.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Movie> {
        let index = self.movies.iter().position(|m| m.id == id)?;
        Some(self.movies.remove(index))
    }

    /// Merge `patch` into the record with `id` and return the result.
    pub fn merge_by_id(&mut self, id: &str, patch: MoviePatch) -> Option<&Movie> {
        let movie = self.movies.iter_mut().find(|m| m.id == id)?;
        movie.apply_patch(patch);
        Some(&*movie)
    }
}
