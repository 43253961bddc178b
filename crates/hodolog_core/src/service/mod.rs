//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own domain error signalling (`PostNotFound`).

pub mod post_service;
