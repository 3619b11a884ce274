//! Handlers for the `/directors` resource.

use axum::extract::{Path, State};
use axum::Json;
use marquee_core::guild::GuildOwner;
use marquee_core::types::DbId;
use marquee_db::models::guild_membership::GuildMembership;
use marquee_db::models::record::MovieRecord;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/directors/{id}/movies
pub async fn movies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<MovieRecord>>> {
    let movies = state.catalog.director_movies(id).await?;
    let records = state.catalog.serialize_all(&movies).await?;
    Ok(Json(records))
}

/// GET /api/v1/directors/{id}/guild
pub async fn guild(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GuildMembership>> {
    let membership = state
        .catalog
        .guild_membership(GuildOwner::Director(id))
        .await?;
    Ok(Json(membership))
}
