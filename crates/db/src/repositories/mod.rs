//! Repository layer over the shared [`crate::DbPool`].

pub mod movie_repo;

pub use movie_repo::MovieRepo;
