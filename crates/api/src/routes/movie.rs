//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET /            -> list
/// GET /featured    -> featured
/// GET /{id}        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list))
        .route("/featured", get(movie::featured))
        .route("/{id}", get(movie::get_by_id))
}
