//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::Json;
use marquee_core::types::DbId;
use marquee_db::models::movie::MovieDetail;
use marquee_db::models::record::MovieRecord;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieRecord>>> {
    let movies = state.catalog.list_movies().await?;
    let records = state.catalog.serialize_all(&movies).await?;
    Ok(Json(records))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieRecord>> {
    let detail = state.catalog.get_movie_by_id(id).await?;
    Ok(Json(detail.record()?))
}

/// GET /api/v1/movies/featured
///
/// The first movie, fully resolved, in the render-ready shape.
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<MovieDetail>> {
    let detail = state
        .catalog
        .featured_movie()
        .await?
        .ok_or_else(|| AppError::NotFound("catalog has no movies".to_string()))?;
    Ok(Json(detail))
}
