//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// Routes mounted at `/directors`.
///
/// ```text
/// GET /{id}/movies -> movies
/// GET /{id}/guild  -> guild
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/movies", get(director::movies))
        .route("/{id}/guild", get(director::guild))
}
