//! Domain model for blog posts.
//!
//! # Invariants
//! - Every persisted post is identified by a store-assigned `PostId`.
//! - Deletion is permanent; there are no tombstones.

pub mod post;
