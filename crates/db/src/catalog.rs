//! Query and serialization layer.
//!
//! [`Catalog`] is an explicitly constructed handle over the pool. It answers
//! "one by id" and "all" queries, resolves related entities on demand, and
//! converts movies into [`MovieRecord`]s. It keeps no state between calls.

use marquee_core::error::CoreError;
use marquee_core::guild::GuildOwner;
use marquee_core::types::DbId;
use serde::Serialize;

use crate::error::DbResult;
use crate::models::guild_membership::GuildMembership;
use crate::models::movie::{Movie, MovieDetail};
use crate::models::record::MovieRecord;
use crate::repositories::{ActorRepo, DirectorRepo, GuildMembershipRepo, MovieRepo};
use crate::DbPool;

/// Tables the catalog reads from. All must exist for queries to succeed.
const CATALOG_TABLES: [&str; 5] = [
    "directors",
    "actors",
    "movies",
    "movie_actors",
    "guild_memberships",
];

/// Storage readiness as seen by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogHealth {
    /// The database answered a trivial query.
    pub reachable: bool,
    /// Every catalog table exists.
    pub schema_applied: bool,
}

impl CatalogHealth {
    pub fn is_ready(&self) -> bool {
        self.reachable && self.schema_applied
    }
}

#[derive(Clone)]
pub struct Catalog {
    pool: DbPool,
}

impl Catalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Probe the database and check that the catalog schema is in place.
    ///
    /// Never fails; failures are logged and reported as `false` flags.
    pub async fn health(&self) -> CatalogHealth {
        if let Err(err) = crate::health_check(&self.pool).await {
            tracing::warn!(error = %err, "Catalog database unreachable");
            return CatalogHealth {
                reachable: false,
                schema_applied: false,
            };
        }

        let query = format!(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ({})",
            CATALOG_TABLES.map(|t| format!("'{t}'")).join(", ")
        );
        let schema_applied = match sqlx::query_as::<_, (i64,)>(&query)
            .fetch_one(&self.pool)
            .await
        {
            Ok((present,)) => {
                let applied = present == CATALOG_TABLES.len() as i64;
                if !applied {
                    tracing::warn!(present, "Catalog schema incomplete");
                }
                applied
            }
            Err(err) => {
                tracing::warn!(error = %err, "Catalog schema check failed");
                false
            }
        };

        CatalogHealth {
            reachable: true,
            schema_applied,
        }
    }

    /// A movie with its director and cast resolved.
    pub async fn get_movie_by_id(&self, id: DbId) -> DbResult<MovieDetail> {
        let movie = MovieRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Movie", id })?;
        self.resolve(movie).await
    }

    /// Every movie in storage, director resolved, cast not loaded.
    pub async fn list_movies(&self) -> DbResult<Vec<Movie>> {
        Ok(MovieRepo::list(&self.pool).await?)
    }

    /// The first movie in the catalog, fully resolved for rendering.
    pub async fn featured_movie(&self) -> DbResult<Option<MovieDetail>> {
        match MovieRepo::first(&self.pool).await? {
            Some(movie) => Ok(Some(self.resolve(movie).await?)),
            None => Ok(None),
        }
    }

    /// Flatten a movie into its transmittable record, loading the cast.
    ///
    /// The director is checked before any query runs.
    pub async fn serialize(&self, movie: &Movie) -> DbResult<MovieRecord> {
        movie.require_director()?;
        let actors = MovieRepo::actors_of(&self.pool, movie.id).await?;
        Ok(MovieRecord::from_parts(movie, &actors)?)
    }

    pub async fn serialize_all(&self, movies: &[Movie]) -> DbResult<Vec<MovieRecord>> {
        let mut records = Vec::with_capacity(movies.len());
        for movie in movies {
            records.push(self.serialize(movie).await?);
        }
        Ok(records)
    }

    /// Movies directed by an existing director.
    pub async fn director_movies(&self, director_id: DbId) -> DbResult<Vec<Movie>> {
        if DirectorRepo::find_by_id(&self.pool, director_id).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "Director",
                id: director_id,
            }
            .into());
        }
        Ok(DirectorRepo::movies_of(&self.pool, director_id).await?)
    }

    /// Movies an existing actor appears in.
    pub async fn actor_movies(&self, actor_id: DbId) -> DbResult<Vec<Movie>> {
        if ActorRepo::find_by_id(&self.pool, actor_id).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "Actor",
                id: actor_id,
            }
            .into());
        }
        Ok(ActorRepo::movies_of(&self.pool, actor_id).await?)
    }

    /// The guild membership held by a person.
    ///
    /// `NotFound` names the person when they do not exist, and the membership
    /// when they hold none.
    pub async fn guild_membership(&self, owner: GuildOwner) -> DbResult<GuildMembership> {
        let exists = match owner {
            GuildOwner::Director(id) => DirectorRepo::find_by_id(&self.pool, id).await?.is_some(),
            GuildOwner::Actor(id) => ActorRepo::find_by_id(&self.pool, id).await?.is_some(),
        };
        if !exists {
            return Err(CoreError::NotFound {
                entity: owner.entity(),
                id: owner.id(),
            }
            .into());
        }
        GuildMembershipRepo::find_by_owner(&self.pool, owner)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "GuildMembership",
                    id: owner.id(),
                }
                .into()
            })
    }

    async fn resolve(&self, movie: Movie) -> DbResult<MovieDetail> {
        let actors = MovieRepo::actors_of(&self.pool, movie.id).await?;
        tracing::debug!(movie_id = movie.id, actors = actors.len(), "Resolved movie");
        Ok(MovieDetail::new(movie, actors))
    }
}
