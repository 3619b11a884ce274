//! Director entity model and DTOs.

use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `directors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Director {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

impl Director {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// DTO for creating a new director.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDirector {
    pub first_name: String,
    pub last_name: String,
}
