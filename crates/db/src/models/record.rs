//! The flat, transmittable movie record served by the JSON endpoints.

use marquee_core::error::CoreError;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::movie::Movie;

/// An actor as it appears inside a [`MovieRecord`]: id and last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRef {
    pub id: DbId,
    pub name: String,
}

/// JSON shape:
///
/// ```text
/// { "id", "title", "director" (last name), "director_id",
///   "release_date" (raw timestamp), "actors": [{ "id", "name" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: DbId,
    pub title: String,
    pub director: String,
    pub director_id: DbId,
    pub release_date: Option<Timestamp>,
    pub actors: Vec<ActorRef>,
}

impl MovieRecord {
    /// Build a record from a movie and its resolved cast.
    ///
    /// Fails with `IncompleteEntity` when the movie has no director.
    pub fn from_parts(movie: &Movie, actors: &[Actor]) -> Result<Self, CoreError> {
        let director = movie.require_director()?;
        Ok(Self {
            id: movie.id,
            title: movie.title.clone(),
            director: director.last_name.clone(),
            director_id: director.id,
            release_date: movie.release_date,
            actors: actors
                .iter()
                .map(|a| ActorRef {
                    id: a.id,
                    name: a.last_name.clone(),
                })
                .collect(),
        })
    }
}
