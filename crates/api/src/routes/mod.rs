pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health                GET     liveness and record count
///
/// /movies                GET     list (optional ?genre=), POST create
/// /movies/{id}           GET     fetch, PATCH merge, DELETE remove
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/movies", movies::router())
}
