//! Actor entity model and DTOs.

use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Actor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

/// DTO for creating a new actor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub first_name: String,
    pub last_name: String,
}
