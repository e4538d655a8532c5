//! Movie record types.
//!
//! - [`Movie`] is a stored record, identified by a server-generated id.
//! - [`NewMovie`] is a fully validated create payload.
//! - [`MoviePatch`] is a validated partial update; absent fields are left
//!   untouched when merged.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::MovieId;
use crate::validation::rules::{FieldViolation, MovieField};

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Running time in minutes.
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<String>,
    pub rate: f64,
}

impl Movie {
    /// Build a stored record from a validated create payload.
    pub fn from_new(id: MovieId, new: NewMovie) -> Self {
        Self {
            id,
            title: new.title,
            year: new.year,
            director: new.director,
            duration: new.duration,
            poster: new.poster,
            genre: new.genre,
            rate: new.rate,
        }
    }

    /// Overwrite the fields present in `patch`. The id never changes.
    pub fn apply_patch(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
    }

    /// Whether any of this movie's genres equals `genre`, ignoring case.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.iter().any(|g| genre_eq(g, genre))
    }
}

/// Case-insensitive genre comparison.
pub fn genre_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A validated create payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<String>,
    pub rate: f64,
}

/// A validated partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<String>>,
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// Names of the fields this patch sets, in declaration order.
    pub fn fields(&self) -> Vec<&'static str> {
        let present = [
            (MovieField::Title, self.title.is_some()),
            (MovieField::Year, self.year.is_some()),
            (MovieField::Director, self.director.is_some()),
            (MovieField::Duration, self.duration.is_some()),
            (MovieField::Poster, self.poster.is_some()),
            (MovieField::Genre, self.genre.is_some()),
            (MovieField::Rate, self.rate.is_some()),
        ];
        present
            .into_iter()
            .filter(|(_, set)| *set)
            .map(|(field, _)| field.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

impl TryFrom<MoviePatch> for NewMovie {
    type Error = CoreError;

    /// Promote a patch to a create payload; every field must be present.
    fn try_from(patch: MoviePatch) -> Result<Self, Self::Error> {
        match patch {
            MoviePatch {
                title: Some(title),
                year: Some(year),
                director: Some(director),
                duration: Some(duration),
                poster: Some(poster),
                genre: Some(genre),
                rate: Some(rate),
            } => Ok(NewMovie {
                title,
                year,
                director,
                duration,
                poster,
                genre,
                rate,
            }),
            partial => {
                let present = partial.fields();
                let missing = MovieField::ALL
                    .iter()
                    .filter(|f| !present.contains(&f.as_str()))
                    .map(|f| FieldViolation::required(f.as_str()))
                    .collect();
                Err(CoreError::Validation(missing))
            }
        }
    }
}
