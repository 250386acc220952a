//! In-memory post repository - used in tests and `minimal` builds.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use inkwell_core::domain::{NewPost, Post, PostId};
use inkwell_core::error::RepoError;
use inkwell_core::ports::PostRepository;

/// Post repository backed by a `Vec` behind an async RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    /// Snapshot of every stored post, in insertion order.
    pub async fn all(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        // Same resolution as the document store.
        let now = Utc::now().trunc_subsecs(3);
        let id = PostId::new(Uuid::new_v4().simple().to_string());
        let post = new_post.into_post(id, now);

        self.posts.write().await.push(post.clone());
        Ok(post)
    }
}
