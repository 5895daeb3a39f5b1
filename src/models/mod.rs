// Record types persisted to the flat JSON collection files.
//
// Field names serialize in camelCase so the on-disk records keep the
// original `postIds` / `authorId` / `commentAuthorId` shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    /// Post ids captured at creation time. Posts created later are never
    /// appended here, so `User.posts` resolves against this stale snapshot.
    pub post_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub comment_author_id: String,
    pub post_id: String,
}
