//! Route definitions for the `/actors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET /{id}/movies -> movies
/// GET /{id}/guild  -> guild
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/movies", get(actor::movies))
        .route("/{id}/guild", get(actor::guild))
}
