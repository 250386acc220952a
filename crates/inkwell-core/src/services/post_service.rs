//! Post service - the single domain operation on posts.

use std::sync::Arc;

use crate::domain::{NewPost, Post};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Creates posts through an injected repository.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new post.
    ///
    /// Every repository failure is reported as [`DomainError::CreationFailed`];
    /// callers are not expected to tell failure causes apart.
    pub async fn create(
        &self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Post, DomainError> {
        let new_post = NewPost::new(title, body)?;

        match self.repo.insert(new_post).await {
            Ok(post) => {
                tracing::info!(post_id = %post.id, "Post created");
                Ok(post)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Post creation failed");
                Err(DomainError::CreationFailed(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostId;
    use crate::error::RepoError;
    use async_trait::async_trait;
    use chrono::Utc;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingRepository {
        posts: Mutex<Vec<Post>>,
    }

    #[async_trait]
    impl PostRepository for RecordingRepository {
        async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
            let mut posts = self.posts.lock().await;
            let id = PostId::new(format!("post-{}", posts.len() + 1));
            let post = post.into_post(id, Utc::now());
            posts.push(post.clone());
            Ok(post)
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl PostRepository for FailingRepository {
        async fn insert(&self, _post: NewPost) -> Result<Post, RepoError> {
            Err(RepoError::Connection("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_create_persists_post() {
        let repo = Arc::new(RecordingRepository::default());
        let service = PostService::new(repo.clone());

        let post = service.create("Hello", "World").await.unwrap();

        assert_eq!(post.title, "Hello");
        assert_eq!(post.body, "World");
        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(repo.posts.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_is_not_idempotent() {
        let repo = Arc::new(RecordingRepository::default());
        let service = PostService::new(repo.clone());

        let first = service.create("Hello", "World").await.unwrap();
        let second = service.create("Hello", "World").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.posts.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn test_repository_failure_is_collapsed() {
        let service = PostService::new(Arc::new(FailingRepository));

        let err = service.create("Hello", "World").await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::CreationFailed(RepoError::Connection(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_fields_never_reach_repository() {
        let repo = Arc::new(RecordingRepository::default());
        let service = PostService::new(repo.clone());

        let err = service.create("", "World").await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(repo.posts.lock().await.is_empty());
    }
}
