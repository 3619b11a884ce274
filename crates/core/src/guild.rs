//! Guild membership ownership.
//!
//! A membership belongs to exactly one person, either a director or an actor.
//! Storage keeps two nullable foreign keys; this module is the only place that
//! converts between that pair and the tagged [`GuildOwner`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// The person holding a guild membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum GuildOwner {
    Director(DbId),
    Actor(DbId),
}

impl GuildOwner {
    /// Rebuild the owner from the `(director_id, actor_id)` column pair.
    ///
    /// Exactly one side must be set.
    pub fn from_columns(director_id: Option<DbId>, actor_id: Option<DbId>) -> Result<Self, CoreError> {
        match (director_id, actor_id) {
            (Some(id), None) => Ok(Self::Director(id)),
            (None, Some(id)) => Ok(Self::Actor(id)),
            (Some(d), Some(a)) => Err(CoreError::Internal(format!(
                "guild membership owned by both director {d} and actor {a}"
            ))),
            (None, None) => Err(CoreError::Internal(
                "guild membership has no owner".to_string(),
            )),
        }
    }

    /// Split into the `(director_id, actor_id)` column pair for storage.
    pub fn to_columns(self) -> (Option<DbId>, Option<DbId>) {
        match self {
            Self::Director(id) => (Some(id), None),
            Self::Actor(id) => (None, Some(id)),
        }
    }

    pub fn id(self) -> DbId {
        match self {
            Self::Director(id) | Self::Actor(id) => id,
        }
    }

    /// Entity name of the owning side, used in error messages.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Director(_) => "Director",
            Self::Actor(_) => "Actor",
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn director_column_maps_to_director_owner() {
        assert_eq!(
            GuildOwner::from_columns(Some(3), None).unwrap(),
            GuildOwner::Director(3)
        );
    }

    #[test]
    fn actor_column_maps_to_actor_owner() {
        assert_eq!(
            GuildOwner::from_columns(None, Some(7)).unwrap(),
            GuildOwner::Actor(7)
        );
    }

    #[test]
    fn both_columns_set_is_rejected() {
        assert_matches!(
            GuildOwner::from_columns(Some(1), Some(2)),
            Err(CoreError::Internal(_))
        );
    }

    #[test]
    fn no_columns_set_is_rejected() {
        assert_matches!(
            GuildOwner::from_columns(None, None),
            Err(CoreError::Internal(_))
        );
    }

    #[test]
    fn columns_round_trip() {
        for owner in [GuildOwner::Director(4), GuildOwner::Actor(9)] {
            let (d, a) = owner.to_columns();
            assert_eq!(GuildOwner::from_columns(d, a).unwrap(), owner);
        }
    }

    #[test]
    fn serializes_as_tagged_object() {
        let json = serde_json::to_value(GuildOwner::Actor(9)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "actor", "id": 9}));
    }
}
