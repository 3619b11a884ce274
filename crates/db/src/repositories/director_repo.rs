//! Repository for the `directors` table.

use marquee_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::director::{CreateDirector, Director};
use crate::models::movie::{Movie, MovieRow};
use crate::repositories::movie_repo::SELECT_MOVIES;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name";

/// Provides create and lookup operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateDirector,
    ) -> Result<Director, sqlx::Error> {
        let query = format!(
            "INSERT INTO directors (first_name, last_name) VALUES (?1, ?2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(conn)
            .await
    }

    /// Find a director by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE id = ?1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all directors in creation order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors ORDER BY id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Movies directed by `director_id`, in creation order.
    ///
    /// Returns an empty list for an unknown director; callers that need to
    /// distinguish the two check existence first.
    pub async fn movies_of(pool: &SqlitePool, director_id: DbId) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("{SELECT_MOVIES} WHERE m.director_id = ?1 ORDER BY m.id");
        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .bind(director_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }
}
