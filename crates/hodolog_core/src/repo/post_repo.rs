//! Post repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and paged listing over the `posts` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `find_all` returns creation order (`id ASC`).
//! - Paged reads return newest first (`id DESC`).

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::post::{NewPost, Post, PostId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const POST_SELECT_SQL: &str = "SELECT id, title, content FROM posts";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for post persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Raised by `update` only; reads and deletes report absence differently.
    NotFound(PostId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "post not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted post data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for post CRUD operations.
pub trait PostRepository {
    /// Persists a new post and returns it with its assigned id.
    fn save(&self, post: &NewPost) -> RepoResult<Post>;
    /// Persists every post in order; either all rows land or none do.
    fn save_all(&self, posts: &[NewPost]) -> RepoResult<Vec<Post>>;
    fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;
    /// Returns every post in creation order.
    fn find_all(&self) -> RepoResult<Vec<Post>>;
    /// Returns at most `limit` posts, newest first, skipping `offset`.
    fn find_all_ordered_by_id_desc(&self, offset: u64, limit: u32) -> RepoResult<Vec<Post>>;
    /// Overwrites title and content of an existing post.
    fn update(&self, post: &Post) -> RepoResult<()>;
    fn delete_by_id(&self, id: PostId) -> RepoResult<()>;
    fn delete_all(&self) -> RepoResult<()>;
    fn count(&self) -> RepoResult<u64>;
}

impl<R: PostRepository + ?Sized> PostRepository for &R {
    fn save(&self, post: &NewPost) -> RepoResult<Post> {
        (**self).save(post)
    }

    fn save_all(&self, posts: &[NewPost]) -> RepoResult<Vec<Post>> {
        (**self).save_all(posts)
    }

    fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Post>> {
        (**self).find_all()
    }

    fn find_all_ordered_by_id_desc(&self, offset: u64, limit: u32) -> RepoResult<Vec<Post>> {
        (**self).find_all_ordered_by_id_desc(offset, limit)
    }

    fn update(&self, post: &Post) -> RepoResult<()> {
        (**self).update(post)
    }

    fn delete_by_id(&self, id: PostId) -> RepoResult<()> {
        (**self).delete_by_id(id)
    }

    fn delete_all(&self) -> RepoResult<()> {
        (**self).delete_all()
    }

    fn count(&self) -> RepoResult<u64> {
        (**self).count()
    }
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version is not the latest.
    /// - `MissingRequiredTable` when `posts` does not exist.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = current_user_version(conn)?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let has_posts: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'posts'
            );",
            [],
            |row| row.get(0),
        )?;
        if has_posts == 0 {
            return Err(RepoError::MissingRequiredTable("posts"));
        }

        Ok(Self { conn })
    }

    fn query_posts(&self, sql: &str, params: impl rusqlite::Params) -> RepoResult<Vec<Post>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }
        Ok(posts)
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn save(&self, post: &NewPost) -> RepoResult<Post> {
        insert_post(self.conn, post)
    }

    fn save_all(&self, posts: &[NewPost]) -> RepoResult<Vec<Post>> {
        let tx = self.conn.unchecked_transaction()?;
        let saved = posts
            .iter()
            .map(|post| insert_post(&tx, post))
            .collect::<RepoResult<Vec<_>>>()?;
        tx.commit()?;
        Ok(saved)
    }

    fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let mut posts = self.query_posts(&format!("{POST_SELECT_SQL} WHERE id = ?1;"), [id])?;
        Ok(posts.pop())
    }

    fn find_all(&self) -> RepoResult<Vec<Post>> {
        self.query_posts(&format!("{POST_SELECT_SQL} ORDER BY id ASC;"), [])
    }

    fn find_all_ordered_by_id_desc(&self, offset: u64, limit: u32) -> RepoResult<Vec<Post>> {
        // SQLite binds signed 64-bit integers; anything larger is past the end anyway.
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        self.query_posts(
            &format!("{POST_SELECT_SQL} ORDER BY id DESC LIMIT ?1 OFFSET ?2;"),
            params![i64::from(limit), offset],
        )
    }

    fn update(&self, post: &Post) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE posts SET title = ?1, content = ?2 WHERE id = ?3;",
            params![post.title.as_str(), post.content.as_str(), post.id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(post.id));
        }

        Ok(())
    }

    fn delete_by_id(&self, id: PostId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM posts WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn delete_all(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM posts;", [])?;
        Ok(())
    }

    fn count(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM posts;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative post count `{count}`")))
    }
}

fn insert_post(conn: &Connection, post: &NewPost) -> RepoResult<Post> {
    conn.execute(
        "INSERT INTO posts (title, content) VALUES (?1, ?2);",
        params![post.title.as_str(), post.content.as_str()],
    )?;

    Ok(Post {
        id: conn.last_insert_rowid(),
        title: post.title.clone(),
        content: post.content.clone(),
    })
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    let id: i64 = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{id}` in posts.id"
        )));
    }

    Ok(Post {
        id,
        title: row.get("title")?,
        content: row.get("content")?,
    })
}
