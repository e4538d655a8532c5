//! Handlers for the movie catalogue.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::validation::{validate_movie, validate_partial_movie};
use reel_db::repositories::MovieRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::GenreFilter;
use crate::response::MessageResponse;
use crate::state::AppState;

/// 404 body for `GET /movies/{id}`; the other routes report `CoreError::NotFound`.
const MOVIE_LOOKUP_NOT_FOUND: &str = "Movie not found.";

fn movie_not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// GET /movies
///
/// List all movies, or only those in `?genre=` (case-insensitive).
pub async fn list_movies(
    State(state): State<AppState>,
    filter: Result<Query<GenreFilter>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(filter) = filter?;
    let movies = MovieRepo::list(&state.pool, filter.genre()).await;

    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let Some(movie) = MovieRepo::find_by_id(&state.pool, &id).await else {
        tracing::debug!(movie_id = %id, "Movie not found");
        return Err(AppError::NotFound(MOVIE_LOOKUP_NOT_FOUND));
    };

    Ok(Json(movie))
}

/// POST /movies
///
/// Validate a full payload and store it under a new id.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let input = validate_movie(&payload)?;

    let movie = MovieRepo::create(&state.pool, input).await;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}
///
/// Validate a partial payload, then merge it into the stored movie.
/// Invalid payloads are rejected before the id is looked up.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let patch = validate_partial_movie(&payload)?;
    let fields = patch.fields();

    let movie = MovieRepo::update(&state.pool, &id, patch)
        .await
        .ok_or_else(|| movie_not_found(id))?;

    tracing::info!(movie_id = %movie.id, ?fields, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !MovieRepo::delete(&state.pool, &id).await {
        return Err(movie_not_found(id));
    }

    tracing::info!(movie_id = %id, "Movie deleted");

    Ok(Json(MessageResponse::new("Movie deleted")))
}
