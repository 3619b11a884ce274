//! Repository layer.
//!
//! Each repository is a zero-sized struct. Reads accept `&SqlitePool`; writes
//! accept `&mut SqliteConnection` so they run equally on a pooled connection
//! or inside a transaction.

pub mod actor_repo;
pub mod director_repo;
pub mod guild_membership_repo;
pub mod movie_repo;

pub use actor_repo::ActorRepo;
pub use director_repo::DirectorRepo;
pub use guild_membership_repo::GuildMembershipRepo;
pub use movie_repo::MovieRepo;
