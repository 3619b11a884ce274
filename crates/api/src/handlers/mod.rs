pub mod actor;
pub mod director;
pub mod movie;
