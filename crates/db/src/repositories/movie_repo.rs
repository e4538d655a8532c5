//! Repository for movie records.
//!
//! Each operation takes the store lock exactly once, so a request sees and
//! applies whole-record changes.

use reel_core::movie::{Movie, MoviePatch, NewMovie};
use uuid::Uuid;

use crate::DbPool;

/// Provides data access for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies, optionally restricted to one genre (case-insensitive).
    pub async fn list(pool: &DbPool, genre: Option<&str>) -> Vec<Movie> {
        pool.read().await.list(genre)
    }

    /// Find a movie by id.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Option<Movie> {
        pool.read().await.find_by_id(id).cloned()
    }

    /// Insert a new movie under a freshly generated id and return it.
    pub async fn create(pool: &DbPool, input: NewMovie) -> Movie {
        let mut store = pool.write().await;
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !store.contains(&candidate) {
                break candidate;
            }
        };
        let movie = store.append(Movie::from_new(id, input)).clone();
        tracing::debug!(movie_id = %movie.id, total = store.len(), "Movie appended");
        movie
    }

    /// Merge `patch` into an existing movie. Returns `None` if the id is unknown.
    pub async fn update(pool: &DbPool, id: &str, patch: MoviePatch) -> Option<Movie> {
        pool.write().await.merge_by_id(id, patch).cloned()
    }

    /// Delete a movie by id. Returns `true` if a record was removed.
    pub async fn delete(pool: &DbPool, id: &str) -> bool {
        pool.write().await.remove_by_id(id).is_some()
    }

    /// Number of stored movies.
    pub async fn count(pool: &DbPool) -> usize {
        pool.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, seed};

    fn new_movie(title: &str) -> NewMovie {
        NewMovie {
            title: title.into(),
            year: 1979,
            director: "Ridley Scott".into(),
            duration: 117,
            poster: "https://example.com/alien.jpg".into(),
            genre: vec!["Horror".into(), "Sci-Fi".into()],
            rate: 8.5,
        }
    }

    #[tokio::test]
    async fn create_persists_with_fresh_id() {
        let pool = create_pool(seed::embedded().unwrap()).unwrap();
        let before = MovieRepo::count(&pool).await;

        let first = MovieRepo::create(&pool, new_movie("Alien")).await;
        let second = MovieRepo::create(&pool, new_movie("Alien")).await;

        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
        assert_eq!(MovieRepo::count(&pool).await, before + 2);
        let found = MovieRepo::find_by_id(&pool, &first.id).await;
        assert_eq!(found, Some(first));
    }

    #[tokio::test]
    async fn update_is_visible_to_later_reads() {
        let pool = create_pool(vec![]).unwrap();
        let created = MovieRepo::create(&pool, new_movie("Alien")).await;

        let patch = MoviePatch {
            rate: Some(9.1),
            ..Default::default()
        };
        let updated = MovieRepo::update(&pool, &created.id, patch).await.unwrap();
        assert_eq!(updated.rate, 9.1);
        assert_eq!(updated.title, "Alien");

        let stored = MovieRepo::find_by_id(&pool, &created.id).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn update_unknown_id_is_none() {
        let pool = create_pool(vec![]).unwrap();
        assert!(MovieRepo::update(&pool, "missing", MoviePatch::default())
            .await
            .is_none());
    }

    #[tokio::test]
    async fn delete_then_find_is_none() {
        let pool = create_pool(vec![]).unwrap();
        let created = MovieRepo::create(&pool, new_movie("Alien")).await;

        assert!(MovieRepo::delete(&pool, &created.id).await);
        assert!(!MovieRepo::delete(&pool, &created.id).await);
        assert!(MovieRepo::find_by_id(&pool, &created.id).await.is_none());
    }

    #[tokio::test]
    async fn list_filters_by_genre() {
        let pool = create_pool(seed::embedded().unwrap()).unwrap();
        let action = MovieRepo::list(&pool, Some("action")).await;
        assert!(!action.is_empty());
        assert!(action.iter().all(|m| m.has_genre("Action")));
        assert!(action.len() < MovieRepo::list(&pool, None).await.len());
    }
}
