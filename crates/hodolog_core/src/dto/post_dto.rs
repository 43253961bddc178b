//! Post request/response shapes.
//!
//! # Invariants
//! - `PostEdit` fields are optional; `None` means "leave unchanged".
//! - `PostResponse` exposes only `id`, `title` and `content`.

use crate::model::post::{NewPost, Post, PostId};
use serde::{Deserialize, Serialize};

const SEARCH_DEFAULT_PAGE: u32 = 1;
const SEARCH_DEFAULT_SIZE: u32 = 10;
const SEARCH_MAX_SIZE: u32 = 2000;

/// Input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
}

impl PostCreate {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl From<PostCreate> for NewPost {
    fn from(value: PostCreate) -> Self {
        NewPost {
            title: value.title,
            content: value.content,
        }
    }
}

/// Partial edit input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEdit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PostEdit {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }
}

/// 1-based page request.
///
/// `page = 0` is read as the first page and sizes above 2000 are capped. A
/// missing `size` defaults to 10; an explicit 0 yields an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSearch {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

impl Default for PostSearch {
    fn default() -> Self {
        Self {
            page: SEARCH_DEFAULT_PAGE,
            size: SEARCH_DEFAULT_SIZE,
        }
    }
}

impl PostSearch {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Effective page size after capping.
    pub fn limit(&self) -> u32 {
        self.size.min(SEARCH_MAX_SIZE)
    }

    /// Rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(self.limit())
    }
}

fn default_page() -> u32 {
    SEARCH_DEFAULT_PAGE
}

fn default_size() -> u32 {
    SEARCH_DEFAULT_SIZE
}

/// Read projection of one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub content: String,
}

impl From<Post> for PostResponse {
    fn from(value: Post) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
        }
    }
}

impl From<&Post> for PostResponse {
    fn from(value: &Post) -> Self {
        Self {
            id: value.id,
            title: value.title.clone(),
            content: value.content.clone(),
        }
    }
}
