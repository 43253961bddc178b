//! Post entity and its field-level editor.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - Edits go through `PostEditor`, which only overwrites supplied fields.

use serde::{Deserialize, Serialize};

/// Store-assigned post identifier, increasing in creation order.
pub type PostId = i64;

/// Persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
}

/// Post contents before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Post {
    /// Starts an edit seeded with the current field values.
    pub fn editor(&self) -> PostEditor {
        PostEditor {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    /// Writes the editor's merged values back onto this post.
    ///
    /// The id is left untouched.
    pub fn apply(&mut self, editor: PostEditor) {
        self.title = editor.title;
        self.content = editor.content;
    }
}

/// Merge buffer for partial edits.
///
/// Setters take `Option`s: `None` keeps the value the editor was seeded with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEditor {
    title: String,
    content: String,
}

impl PostEditor {
    pub fn title(mut self, title: Option<String>) -> Self {
        if let Some(title) = title {
            self.title = title;
        }
        self
    }

    pub fn content(mut self, content: Option<String>) -> Self {
        if let Some(content) = content {
            self.content = content;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Post;

    fn sample() -> Post {
        Post {
            id: 7,
            title: "title".to_string(),
            content: "content".to_string(),
        }
    }

    #[test]
    fn editor_without_changes_keeps_fields() {
        let mut post = sample();
        let editor = post.editor().title(None).content(None);
        post.apply(editor);
        assert_eq!(post, sample());
    }

    #[test]
    fn editor_overwrites_only_supplied_fields() {
        let mut post = sample();
        let editor = post.editor().content(Some("rewritten".to_string()));
        post.apply(editor);

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "title");
        assert_eq!(post.content, "rewritten");
    }

    #[test]
    fn editor_accepts_empty_strings_as_values() {
        let mut post = sample();
        let editor = post.editor().title(Some(String::new()));
        post.apply(editor);
        assert_eq!(post.title, "");
    }
}
