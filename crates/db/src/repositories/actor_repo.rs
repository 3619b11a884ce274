//! Repository for the `actors` table.

use marquee_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::actor::{Actor, CreateActor};
use crate::models::movie::{Movie, MovieRow};
use crate::repositories::movie_repo::SELECT_MOVIES;

const COLUMNS: &str = "id, first_name, last_name";

pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateActor,
    ) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (first_name, last_name) VALUES (?1, ?2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = ?1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY id");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    /// Movies the actor appears in, navigating the junction from the actor side.
    pub async fn movies_of(pool: &SqlitePool, actor_id: DbId) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "{SELECT_MOVIES} \
             JOIN movie_actors ma ON ma.movie_id = m.id \
             WHERE ma.actor_id = ?1 \
             ORDER BY m.id"
        );
        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .bind(actor_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }
}
