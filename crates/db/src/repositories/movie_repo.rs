//! Repository for the `movies` and `movie_actors` tables.
//!
//! Relation strategy:
//! - director: eager, joined into every movie query ([`SELECT_MOVIES`])
//! - actors: on demand, through [`MovieRepo::actors_of`]

use marquee_core::attach::{dedupe_actor_ids, missing_ids};
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use sqlx::{Connection, SqliteConnection, SqlitePool};

use crate::error::DbResult;
use crate::models::actor::Actor;
use crate::models::movie::{CreateMovie, Movie, MovieRow};

/// Movie columns joined with the director's name. Aliased `m` and `d`.
pub(crate) const SELECT_MOVIES: &str = "\
    SELECT m.id, m.title, m.release_date, m.director_id, \
           d.first_name AS director_first_name, d.last_name AS director_last_name \
    FROM movies m \
    LEFT JOIN directors d ON d.id = m.director_id";

/// Provides create, lookup, and relation operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning it with its director resolved.
    ///
    /// A `director_id` that does not exist is a constraint violation.
    pub async fn create(conn: &mut SqliteConnection, input: &CreateMovie) -> DbResult<Movie> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO movies (title, release_date, director_id) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(&input.title)
        .bind(input.release_date)
        .bind(input.director_id)
        .fetch_one(&mut *conn)
        .await?;

        let movie = Self::fetch_in(conn, id).await?;
        tracing::debug!(movie_id = movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    /// Assign the director of a movie.
    ///
    /// There is no way to clear a director once set.
    pub async fn assign_director(
        conn: &mut SqliteConnection,
        movie_id: DbId,
        director_id: DbId,
    ) -> DbResult<Movie> {
        let result = sqlx::query("UPDATE movies SET director_id = ?2 WHERE id = ?1")
            .bind(movie_id)
            .bind(director_id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "Movie",
                id: movie_id,
            }
            .into());
        }
        Ok(Self::fetch_in(conn, movie_id).await?)
    }

    /// Find a movie by ID with its director resolved.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("{SELECT_MOVIES} WHERE m.id = ?1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Movie::from))
    }

    /// The movie with the lowest ID, if any.
    pub async fn first(pool: &SqlitePool) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("{SELECT_MOVIES} ORDER BY m.id LIMIT 1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Movie::from))
    }

    /// List all movies in creation order. Actors are not loaded.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("{SELECT_MOVIES} ORDER BY m.id");
        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    /// Resolve the cast of a movie.
    pub async fn actors_of(pool: &SqlitePool, movie_id: DbId) -> Result<Vec<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "SELECT a.id, a.first_name, a.last_name \
             FROM actors a \
             JOIN movie_actors ma ON ma.actor_id = a.id \
             WHERE ma.movie_id = ?1 \
             ORDER BY a.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Attach actors to a movie. Idempotent.
    ///
    /// Repeated ids and already-attached actors are skipped. The movie and
    /// every actor must exist, otherwise nothing is attached and the call
    /// fails with a constraint violation. Returns the number of new edges.
    pub async fn attach_actors(
        conn: &mut SqliteConnection,
        movie_id: DbId,
        actor_ids: &[DbId],
    ) -> DbResult<u64> {
        let mut tx = conn.begin().await?;

        let movie: Option<(DbId,)> = sqlx::query_as("SELECT id FROM movies WHERE id = ?1")
            .bind(movie_id)
            .fetch_optional(&mut *tx)
            .await?;
        if movie.is_none() {
            return Err(CoreError::ConstraintViolation(format!(
                "cannot attach actors: movie {movie_id} does not exist"
            ))
            .into());
        }

        let actor_ids = dedupe_actor_ids(actor_ids);
        let mut found = Vec::with_capacity(actor_ids.len());
        for &actor_id in &actor_ids {
            let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM actors WHERE id = ?1")
                .bind(actor_id)
                .fetch_optional(&mut *tx)
                .await?;
            if let Some((id,)) = row {
                found.push(id);
            }
        }
        let unknown = missing_ids(&actor_ids, &found);
        if !unknown.is_empty() {
            return Err(CoreError::ConstraintViolation(format!(
                "cannot attach actors to movie {movie_id}: unknown actor ids {unknown:?}"
            ))
            .into());
        }

        let mut attached = 0;
        for &actor_id in &actor_ids {
            let result = sqlx::query(
                "INSERT INTO movie_actors (movie_id, actor_id) VALUES (?1, ?2) \
                 ON CONFLICT (movie_id, actor_id) DO NOTHING",
            )
            .bind(movie_id)
            .bind(actor_id)
            .execute(&mut *tx)
            .await?;
            attached += result.rows_affected();
        }

        tx.commit().await?;
        tracing::debug!(movie_id, attached, requested = actor_ids.len(), "Actors attached");
        Ok(attached)
    }

    async fn fetch_in(conn: &mut SqliteConnection, id: DbId) -> Result<Movie, sqlx::Error> {
        let query = format!("{SELECT_MOVIES} WHERE m.id = ?1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_one(conn)
            .await?;
        Ok(Movie::from(row))
    }
}
