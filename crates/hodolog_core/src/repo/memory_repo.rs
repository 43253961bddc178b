//! In-memory post repository.
//!
//! Backs service tests and quick tooling without a SQLite file. Not `Sync`;
//! share it by reference within one thread.
//!
//! # Invariants
//! - Ids start at 1 and are never reused, even after deletes.

use crate::model::post::{NewPost, Post, PostId};
use crate::repo::post_repo::{PostRepository, RepoError, RepoResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct MemoryState {
    last_id: PostId,
    rows: BTreeMap<PostId, Post>,
}

/// `BTreeMap`-backed repository keyed by id, so iteration is creation order.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    state: RefCell<MemoryState>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for InMemoryPostRepository {
    fn save(&self, post: &NewPost) -> RepoResult<Post> {
        let mut state = self.state.borrow_mut();
        state.last_id += 1;
        let saved = Post {
            id: state.last_id,
            title: post.title.clone(),
            content: post.content.clone(),
        };
        state.rows.insert(saved.id, saved.clone());
        Ok(saved)
    }

    fn save_all(&self, posts: &[NewPost]) -> RepoResult<Vec<Post>> {
        posts.iter().map(|post| self.save(post)).collect()
    }

    fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.state.borrow().rows.get(&id).cloned())
    }

    fn find_all(&self) -> RepoResult<Vec<Post>> {
        Ok(self.state.borrow().rows.values().cloned().collect())
    }

    fn find_all_ordered_by_id_desc(&self, offset: u64, limit: u32) -> RepoResult<Vec<Post>> {
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .state
            .borrow()
            .rows
            .values()
            .rev()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    fn update(&self, post: &Post) -> RepoResult<()> {
        match self.state.borrow_mut().rows.get_mut(&post.id) {
            Some(row) => {
                row.clone_from(post);
                Ok(())
            }
            None => Err(RepoError::NotFound(post.id)),
        }
    }

    fn delete_by_id(&self, id: PostId) -> RepoResult<()> {
        self.state.borrow_mut().rows.remove(&id);
        Ok(())
    }

    fn delete_all(&self) -> RepoResult<()> {
        self.state.borrow_mut().rows.clear();
        Ok(())
    }

    fn count(&self) -> RepoResult<u64> {
        Ok(self.state.borrow().rows.len() as u64)
    }
}
