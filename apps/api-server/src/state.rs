//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use inkwell_core::PostService;
use inkwell_core::ports::PostRepository;
use inkwell_infra::database::DatabaseConfig;

#[cfg(feature = "mongodb")]
use inkwell_infra::database::{DatabaseConnection, MongoPostRepository};
#[cfg(not(feature = "mongodb"))]
use inkwell_infra::database::InMemoryPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    #[cfg(feature = "mongodb")]
    db: Option<DatabaseConnection>,
}

impl AppState {
    /// Build state around an existing repository, without a database handle.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
            #[cfg(feature = "mongodb")]
            db: None,
        }
    }

    /// Open the database connection and wire the repositories to it.
    #[cfg(feature = "mongodb")]
    pub async fn connect(config: &DatabaseConfig) -> io::Result<Self> {
        let conn = DatabaseConnection::init(config).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to initialize database connection");
            io::Error::other(e)
        })?;

        let repo: Arc<dyn PostRepository> = Arc::new(MongoPostRepository::new(conn.database()));
        tracing::info!("Application state initialized");

        Ok(Self {
            posts: PostService::new(repo),
            db: Some(conn),
        })
    }

    #[cfg(not(feature = "mongodb"))]
    pub async fn connect(_config: &DatabaseConfig) -> io::Result<Self> {
        tracing::info!("Running without mongodb feature - using in-memory repository");
        Ok(Self::with_repository(Arc::new(InMemoryPostRepository::new())))
    }

    /// Release the database connection, if any.
    pub async fn close(self) {
        #[cfg(feature = "mongodb")]
        if let Some(db) = self.db {
            db.close().await;
        }
    }
}
