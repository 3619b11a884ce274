//! Repository for the `guild_memberships` table.

use marquee_core::guild::GuildOwner;
use marquee_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::error::DbResult;
use crate::models::guild_membership::{
    CreateGuildMembership, GuildMembership, GuildMembershipRow,
};

const COLUMNS: &str = "id, guild, director_id, actor_id";

pub struct GuildMembershipRepo;

impl GuildMembershipRepo {
    /// Insert a membership for its owner.
    ///
    /// A second membership for the same person, or an owner that does not
    /// exist, is a constraint violation.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateGuildMembership,
    ) -> DbResult<GuildMembership> {
        let (director_id, actor_id) = input.owner.to_columns();
        let query = format!(
            "INSERT INTO guild_memberships (guild, director_id, actor_id) \
             VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, GuildMembershipRow>(&query)
            .bind(&input.guild)
            .bind(director_id)
            .bind(actor_id)
            .fetch_one(conn)
            .await?;
        Ok(GuildMembership::try_from(row)?)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> DbResult<Option<GuildMembership>> {
        let query = format!("SELECT {COLUMNS} FROM guild_memberships WHERE id = ?1");
        let row = sqlx::query_as::<_, GuildMembershipRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(GuildMembership::try_from).transpose()?)
    }

    /// The membership held by a director or actor, if any.
    pub async fn find_by_owner(
        pool: &SqlitePool,
        owner: GuildOwner,
    ) -> DbResult<Option<GuildMembership>> {
        let column = match owner {
            GuildOwner::Director(_) => "director_id",
            GuildOwner::Actor(_) => "actor_id",
        };
        let query = format!("SELECT {COLUMNS} FROM guild_memberships WHERE {column} = ?1");
        let row = sqlx::query_as::<_, GuildMembershipRow>(&query)
            .bind(owner.id())
            .fetch_optional(pool)
            .await?;
        Ok(row.map(GuildMembership::try_from).transpose()?)
    }
}
