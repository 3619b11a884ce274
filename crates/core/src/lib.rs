//! Domain logic for the marquee movie catalog.
//!
//! Everything in this crate is pure: no database access, no I/O. The
//! persistence layer (`marquee-db`) and the HTTP layer (`marquee-api`) build
//! on these types.

pub mod attach;
pub mod error;
pub mod guild;
pub mod release;
pub mod seed;
pub mod types;
