//! Post store abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract the post service depends on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Lookups by id report absence as `Ok(None)`, never as an error.
//! - Deleting an absent id is a no-op at this layer; not-found signalling
//!   belongs to the service.

pub mod memory_repo;
pub mod post_repo;
