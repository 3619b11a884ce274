pub mod actor;
pub mod director;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                      list (records)
/// /movies/featured             first movie, render-ready
/// /movies/{id}                 single record
///
/// /directors/{id}/movies       movies by director (records)
/// /directors/{id}/guild        director's guild membership
///
/// /actors/{id}/movies          movies featuring actor (records)
/// /actors/{id}/guild           actor's guild membership
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movie::router())
        .nest("/directors", director::router())
        .nest("/actors", actor::router())
}
