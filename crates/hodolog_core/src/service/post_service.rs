//! Post use-case service.
//!
//! # Responsibility
//! - Translate create/edit requests into repository calls.
//! - Raise `PostNotFound` for get/edit/delete on unknown ids.
//! - Shape listed posts into `PostResponse` values.
//!
//! # Invariants
//! - Edits merge: only fields present in `PostEdit` are overwritten.
//! - Paged lists are newest first; `get_list` is creation order.
//! - Service layer remains storage-agnostic.

use crate::dto::post_dto::{PostCreate, PostEdit, PostResponse, PostSearch};
use crate::model::post::{NewPost, Post, PostId};
use crate::repo::post_repo::{PostRepository, RepoError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed page size for `get_list_by_page`.
pub const POSTS_PAGE_SIZE: u32 = 5;

/// Service error for post use-cases.
#[derive(Debug)]
pub enum PostServiceError {
    /// Target post does not exist.
    PostNotFound(PostId),
    /// Persistence-layer failure, passed through unchanged.
    Repo(RepoError),
}

impl PostServiceError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PostNotFound(_) => "post_not_found",
            Self::Repo(_) => "repo_error",
        }
    }

    /// HTTP-equivalent status for outer layers.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::PostNotFound(_) => 404,
            Self::Repo(_) => 500,
        }
    }
}

impl Display for PostServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PostNotFound(id) => write!(f, "post not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PostServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::PostNotFound(_) => None,
        }
    }
}

impl From<RepoError> for PostServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::PostNotFound(id),
            other => Self::Repo(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, PostServiceError>;

/// Post service facade over repository implementations.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new post and returns its id.
    pub fn write(&self, request: PostCreate) -> ServiceResult<PostId> {
        let post = self.repo.save(&NewPost::from(request))?;
        info!("event=post_write module=service status=ok post_id={}", post.id);
        Ok(post.id)
    }

    /// Gets one post by id.
    pub fn get(&self, id: PostId) -> ServiceResult<PostResponse> {
        self.find_existing(id, "post_get").map(PostResponse::from)
    }

    /// Lists all posts in creation order.
    pub fn get_list(&self) -> ServiceResult<Vec<PostResponse>> {
        Ok(to_responses(self.repo.find_all()?))
    }

    /// Lists one zero-based page of `POSTS_PAGE_SIZE` posts, newest first.
    ///
    /// Pages past the end are empty.
    pub fn get_list_by_page(&self, page: u32) -> ServiceResult<Vec<PostResponse>> {
        let offset = u64::from(page).saturating_mul(u64::from(POSTS_PAGE_SIZE));
        debug!("event=post_list module=service mode=page page={page} offset={offset}");
        let posts = self
            .repo
            .find_all_ordered_by_id_desc(offset, POSTS_PAGE_SIZE)?;
        Ok(to_responses(posts))
    }

    /// Lists one 1-based page sized by the search request, newest first.
    pub fn get_list_by_page_dsl(&self, search: &PostSearch) -> ServiceResult<Vec<PostResponse>> {
        let (offset, limit) = (search.offset(), search.limit());
        debug!("event=post_list module=service mode=search offset={offset} limit={limit}");
        let posts = self.repo.find_all_ordered_by_id_desc(offset, limit)?;
        Ok(to_responses(posts))
    }

    /// Merges the supplied fields into an existing post.
    pub fn edit(&self, id: PostId, request: PostEdit) -> ServiceResult<()> {
        let mut post = self.find_existing(id, "post_edit")?;
        let editor = post
            .editor()
            .title(request.title)
            .content(request.content);
        post.apply(editor);

        self.repo.update(&post)?;
        info!("event=post_edit module=service status=ok post_id={id}");
        Ok(())
    }

    /// Permanently deletes an existing post.
    pub fn delete(&self, id: PostId) -> ServiceResult<()> {
        let post = self.find_existing(id, "post_delete")?;
        self.repo.delete_by_id(post.id)?;
        info!("event=post_delete module=service status=ok post_id={id}");
        Ok(())
    }

    fn find_existing(&self, id: PostId, event: &str) -> ServiceResult<Post> {
        match self.repo.find_by_id(id)? {
            Some(post) => Ok(post),
            None => {
                warn!("event={event} module=service status=error error_code=post_not_found post_id={id}");
                Err(PostServiceError::PostNotFound(id))
            }
        }
    }
}

fn to_responses(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(PostResponse::from).collect()
}

#[cfg(test)]
mod tests {
    use super::{PostService, PostServiceError, POSTS_PAGE_SIZE};
    use crate::dto::post_dto::{PostCreate, PostEdit};
    use crate::model::post::NewPost;
    use crate::repo::memory_repo::InMemoryPostRepository;
    use crate::repo::post_repo::{PostRepository, RepoError};

    #[test]
    fn get_list_by_page_uses_fixed_page_size() {
        let repo = InMemoryPostRepository::new();
        let posts = (0..12)
            .map(|i| NewPost::new(format!("p{i}"), "c"))
            .collect::<Vec<_>>();
        repo.save_all(&posts).expect("batch save should succeed");
        let service = PostService::new(&repo);

        let second = service.get_list_by_page(1).expect("page 1 should load");
        assert_eq!(second.len(), POSTS_PAGE_SIZE as usize);
        assert_eq!(second[0].title, "p6");

        let last = service.get_list_by_page(2).expect("page 2 should load");
        assert_eq!(last.len(), 2);
        assert!(service
            .get_list_by_page(u32::MAX)
            .expect("far page should load")
            .is_empty());
    }

    #[test]
    fn edit_with_no_fields_leaves_post_untouched() {
        let repo = InMemoryPostRepository::new();
        let service = PostService::new(&repo);
        let id = service.write(PostCreate::new("t", "c")).expect("write should succeed");

        service.edit(id, PostEdit::default()).expect("empty edit should succeed");

        let post = service.get(id).expect("post should exist");
        assert_eq!((post.title.as_str(), post.content.as_str()), ("t", "c"));
    }

    #[test]
    fn repo_not_found_maps_to_post_not_found() {
        let err = PostServiceError::from(RepoError::NotFound(3));
        assert!(matches!(err, PostServiceError::PostNotFound(3)));
        assert_eq!(err.code(), "post_not_found");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn other_repo_errors_pass_through() {
        let err = PostServiceError::from(RepoError::InvalidData("bad".to_string()));
        assert!(matches!(err, PostServiceError::Repo(_)));
        assert_eq!(err.status_code(), 500);
    }
}
