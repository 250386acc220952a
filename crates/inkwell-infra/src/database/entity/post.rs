//! Post document as stored in the `posts` collection.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use inkwell_core::domain::{NewPost, Post, PostId};

pub const COLLECTION_NAME: &str = "posts";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub body: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl Document {
    /// Build a fresh document with a new id; both timestamps are `now`.
    pub fn new(post: NewPost, now: DateTime<Utc>) -> Self {
        let stamp = bson::DateTime::from_chrono(now);
        Self {
            id: ObjectId::new(),
            title: post.title().to_owned(),
            body: post.body().to_owned(),
            created_at: stamp,
            updated_at: stamp,
        }
    }
}

/// Conversion from stored Document to Domain Post.
impl From<Document> for Post {
    fn from(document: Document) -> Self {
        Self {
            id: PostId::new(document.id.to_hex()),
            title: document.title,
            body: document.body,
            created_at: document.created_at.to_chrono(),
            updated_at: document.updated_at.to_chrono(),
        }
    }
}
