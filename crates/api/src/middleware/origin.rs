//! Origin allow-list enforcement.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;
use crate::state::AppState;

/// Reject the request with 403 unless its `Origin` header is absent or
/// allow-listed. Applies to every method, CORS preflight included.
pub async fn require_allowed_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let origin = request
        .headers()
        .get(ORIGIN)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

    state.origin_guard.check(origin.as_deref())?;

    Ok(next.run(request).await)
}
