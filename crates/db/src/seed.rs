//! Reset-and-reseed.
//!
//! The whole operation runs in one transaction: rows are cleared, id
//! sequences are reset, and the dataset is inserted. Readers see either the
//! old catalog or the new one, never a partial seed.

use std::collections::HashMap;

use marquee_core::guild::GuildOwner;
use marquee_core::release::parse_release_date;
use marquee_core::seed::SeedDataset;
use marquee_core::types::DbId;
use serde::Serialize;
use sqlx::SqliteConnection;

use crate::error::DbResult;
use crate::models::actor::CreateActor;
use crate::models::director::CreateDirector;
use crate::models::guild_membership::CreateGuildMembership;
use crate::models::movie::CreateMovie;
use crate::repositories::{ActorRepo, DirectorRepo, GuildMembershipRepo, MovieRepo};
use crate::DbPool;

/// Tables in child-first order so deletes never trip a foreign key.
const TABLES: [&str; 5] = [
    "guild_memberships",
    "movie_actors",
    "movies",
    "actors",
    "directors",
];

/// Row counts written by a seed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub directors: usize,
    pub actors: usize,
    pub movies: usize,
    pub attachments: u64,
    pub memberships: usize,
}

/// Clear every catalog table and insert `dataset`, atomically.
pub async fn reset_and_seed(pool: &DbPool, dataset: &SeedDataset) -> DbResult<SeedSummary> {
    dataset.validate()?;

    let mut tx = pool.begin().await?;
    clear_all(&mut tx).await?;
    let summary = insert_dataset(&mut tx, dataset).await?;
    tx.commit().await?;

    tracing::info!(
        directors = summary.directors,
        actors = summary.actors,
        movies = summary.movies,
        attachments = summary.attachments,
        memberships = summary.memberships,
        "Catalog reseeded"
    );
    Ok(summary)
}

/// Delete all rows and restart the id sequences.
pub async fn clear_all(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    for table in TABLES {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *conn)
            .await?;
    }
    sqlx::query(
        "DELETE FROM sqlite_sequence \
         WHERE name IN ('guild_memberships', 'movies', 'actors', 'directors')",
    )
    .execute(&mut *conn)
    .await?;
    Ok(())
}

async fn insert_dataset(conn: &mut SqliteConnection, dataset: &SeedDataset) -> DbResult<SeedSummary> {
    let mut summary = SeedSummary::default();
    let mut director_ids: HashMap<String, DbId> = HashMap::new();
    let mut actor_ids: HashMap<String, DbId> = HashMap::new();

    for person in &dataset.directors {
        let director = DirectorRepo::create(
            &mut *conn,
            &CreateDirector {
                first_name: person.first_name.to_string(),
                last_name: person.last_name.to_string(),
            },
        )
        .await?;
        if let Some(guild) = person.guild {
            create_membership(&mut *conn, guild, GuildOwner::Director(director.id)).await?;
            summary.memberships += 1;
        }
        director_ids.insert(person.full_name(), director.id);
        summary.directors += 1;
    }

    for person in &dataset.actors {
        let actor = ActorRepo::create(
            &mut *conn,
            &CreateActor {
                first_name: person.first_name.to_string(),
                last_name: person.last_name.to_string(),
            },
        )
        .await?;
        if let Some(guild) = person.guild {
            create_membership(&mut *conn, guild, GuildOwner::Actor(actor.id)).await?;
            summary.memberships += 1;
        }
        actor_ids.insert(person.full_name(), actor.id);
        summary.actors += 1;
    }

    for seed in &dataset.movies {
        let movie = MovieRepo::create(
            &mut *conn,
            &CreateMovie {
                title: seed.title.to_string(),
                release_date: Some(parse_release_date(seed.released)?),
                director_id: director_ids.get(seed.director).copied(),
            },
        )
        .await?;
        let cast: Vec<DbId> = seed
            .actors
            .iter()
            .filter_map(|name| actor_ids.get(*name).copied())
            .collect();
        summary.attachments += MovieRepo::attach_actors(&mut *conn, movie.id, &cast).await?;
        summary.movies += 1;
    }

    Ok(summary)
}

async fn create_membership(
    conn: &mut SqliteConnection,
    guild: &str,
    owner: GuildOwner,
) -> DbResult<()> {
    GuildMembershipRepo::create(
        conn,
        &CreateGuildMembership {
            guild: guild.to_string(),
            owner,
        },
    )
    .await?;
    Ok(())
}
