//! Core domain logic for the Hodolog blog.
//! This crate owns post persistence and the post use-cases built on it.

pub mod config;
pub mod db;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use dto::post_dto::{PostCreate, PostEdit, PostResponse, PostSearch};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::post::{NewPost, Post, PostEditor, PostId};
pub use repo::memory_repo::InMemoryPostRepository;
pub use repo::post_repo::{PostRepository, RepoError, RepoResult, SqlitePostRepository};
pub use service::post_service::{
    PostService, PostServiceError, ServiceResult, POSTS_PAGE_SIZE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
