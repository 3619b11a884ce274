//! Guild membership entity model and DTOs.
//!
//! The table stores the owner as two nullable foreign keys; the model only
//! exposes the tagged [`GuildOwner`].

use marquee_core::error::CoreError;
use marquee_core::guild::GuildOwner;
use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A raw row from the `guild_memberships` table.
#[derive(Debug, Clone, FromRow)]
pub struct GuildMembershipRow {
    pub id: DbId,
    pub guild: String,
    pub director_id: Option<DbId>,
    pub actor_id: Option<DbId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuildMembership {
    pub id: DbId,
    pub guild: String,
    pub owner: GuildOwner,
}

impl TryFrom<GuildMembershipRow> for GuildMembership {
    type Error = CoreError;

    fn try_from(row: GuildMembershipRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            guild: row.guild,
            owner: GuildOwner::from_columns(row.director_id, row.actor_id)?,
        })
    }
}

/// DTO for creating a new guild membership.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGuildMembership {
    pub guild: String,
    pub owner: GuildOwner,
}
