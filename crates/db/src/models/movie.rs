//! Movie entity model and DTOs.
//!
//! The director is resolved eagerly: every movie query joins `directors`, so
//! a loaded [`Movie`] always carries its director when one is assigned. The
//! cast is resolved on demand through `MovieRepo::actors_of` and only
//! appears on [`MovieDetail`].

use marquee_core::error::CoreError;
use marquee_core::release::release_year;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::actor::Actor;
use super::director::Director;
use super::record::MovieRecord;

/// A `movies` row joined with its director's columns.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    pub release_date: Option<Timestamp>,
    pub director_id: Option<DbId>,
    pub director_first_name: Option<String>,
    pub director_last_name: Option<String>,
}

/// A movie with its director resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_date: Option<Timestamp>,
    pub director: Option<Director>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        let director = match (row.director_id, row.director_first_name, row.director_last_name) {
            (Some(id), Some(first_name), Some(last_name)) => Some(Director {
                id,
                first_name,
                last_name,
            }),
            _ => None,
        };
        Self {
            id: row.id,
            title: row.title,
            release_date: row.release_date,
            director,
        }
    }
}

impl Movie {
    /// The assigned director, or `IncompleteEntity` if none is set.
    pub fn require_director(&self) -> Result<&Director, CoreError> {
        self.director.as_ref().ok_or(CoreError::IncompleteEntity {
            entity: "Movie",
            id: self.id,
            missing: "director",
        })
    }

    /// Four-digit release year, or `IncompleteEntity` if no release date is set.
    pub fn release_year(&self) -> Result<String, CoreError> {
        self.release_date
            .as_ref()
            .map(release_year)
            .ok_or(CoreError::IncompleteEntity {
                entity: "Movie",
                id: self.id,
                missing: "release date",
            })
    }
}

/// DTO for creating a new movie. The director may be assigned later.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub release_date: Option<Timestamp>,
    pub director_id: Option<DbId>,
}

/// A fully resolved movie, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub release_year: Option<String>,
    pub actors: Vec<Actor>,
}

impl MovieDetail {
    pub fn new(movie: Movie, actors: Vec<Actor>) -> Self {
        let release_year = movie.release_year().ok();
        Self {
            movie,
            release_year,
            actors,
        }
    }

    /// Flatten into the transmittable record.
    pub fn record(&self) -> Result<MovieRecord, CoreError> {
        MovieRecord::from_parts(&self.movie, &self.actors)
    }
}
