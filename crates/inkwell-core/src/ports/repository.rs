use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post repository - the persistence boundary for posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post, returning it with its assigned id and timestamps.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;
}
