//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod actor;
pub mod director;
pub mod guild_membership;
pub mod movie;
pub mod record;
