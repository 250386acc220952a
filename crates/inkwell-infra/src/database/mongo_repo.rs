//! MongoDB repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::{Collection, Database};

use inkwell_core::domain::{NewPost, Post};
use inkwell_core::error::RepoError;
use inkwell_core::ports::PostRepository;

use super::entity::post::{self, Document as PostDocument};

const DUPLICATE_KEY: i32 = 11000;

/// MongoDB post repository.
#[derive(Clone)]
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(post::COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let document = PostDocument::new(new_post, Utc::now());

        self.collection
            .insert_one(&document)
            .await
            .map_err(map_mongo_error)?;

        tracing::debug!(post_id = %document.id, "Post document inserted");
        Ok(document.into())
    }
}

fn map_mongo_error(err: MongoError) -> RepoError {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY => {
            RepoError::Constraint("Entity already exists".to_string())
        }
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}
