use hodolog_core::{Post, PostCreate, PostEdit, PostResponse, PostSearch};
use serde_json::json;

#[test]
fn post_edit_accepts_partial_json() {
    let edit: PostEdit = serde_json::from_value(json!({ "title": "only title" })).unwrap();
    assert_eq!(edit, PostEdit::title("only title"));

    let empty: PostEdit = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty, PostEdit::default());
}

#[test]
fn post_edit_omits_absent_fields_when_serialized() {
    let value = serde_json::to_value(PostEdit::content("body")).unwrap();
    assert_eq!(value, json!({ "content": "body" }));
}

#[test]
fn post_search_defaults_missing_fields() {
    let search: PostSearch = serde_json::from_value(json!({ "page": 2 })).unwrap();
    assert_eq!(search, PostSearch::new(2, 10));
    assert_eq!(search.offset(), 10);
}

#[test]
fn post_create_requires_both_fields() {
    let result = serde_json::from_value::<PostCreate>(json!({ "title": "t" }));
    assert!(result.is_err());
}

#[test]
fn post_response_exposes_only_projection_fields() {
    let post = Post {
        id: 3,
        title: "title".to_string(),
        content: "content".to_string(),
    };

    let value = serde_json::to_value(PostResponse::from(&post)).unwrap();
    assert_eq!(
        value,
        json!({ "id": 3, "title": "title", "content": "content" })
    );
    assert_eq!(PostResponse::from(post.clone()), PostResponse::from(&post));
}
