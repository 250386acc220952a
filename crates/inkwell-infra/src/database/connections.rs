use std::time::Duration;

#[cfg(feature = "mongodb")]
use mongodb::{Client, Database, bson::doc, options::ClientOptions};

/// Database used when the connection string does not name one.
pub const DEFAULT_DATABASE_NAME: &str = "test";

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub max_pool_size: u32,
    pub idle_timeout: Duration,
    pub app_name: String,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_POOL_SIZE: u32 = 15;
    pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(45);

    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            max_pool_size: Self::DEFAULT_MAX_POOL_SIZE,
            idle_timeout: Self::DEFAULT_IDLE_TIMEOUT,
            app_name: "inkwell".to_string(),
        }
    }
}

/// Process-wide handle to the document store.
///
/// Cheap to clone; the driver pools connections internally.
///
/// # Example
/// ```ignore
/// let conn = DatabaseConnection::init(&config).await?;
/// let posts = MongoPostRepository::new(conn.database());
/// ```
#[cfg(feature = "mongodb")]
#[derive(Clone)]
pub struct DatabaseConnection {
    client: Client,
    database: Database,
}

#[cfg(feature = "mongodb")]
impl DatabaseConnection {
    /// Build the client and check that the server answers.
    ///
    /// A malformed connection string is an error. An unreachable server is
    /// only logged: the driver keeps trying on every operation.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!("Initializing database connection...");

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.max_pool_size = Some(config.max_pool_size);
        options.max_idle_time = Some(config.idle_timeout);
        options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(options)?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME));

        let conn = Self { client, database };

        match conn.ping().await {
            Ok(()) => tracing::info!(
                database = %conn.database.name(),
                pool = config.max_pool_size,
                "Connected to database successfully"
            ),
            Err(e) => tracing::error!(
                database = %conn.database.name(),
                error = %e,
                "Database connection error"
            ),
        }

        Ok(conn)
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Round-trip a `ping` command to the server.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Close every pooled connection without waiting for in-flight work.
    pub async fn close(self) {
        self.client.shutdown().immediate(true).await;
        tracing::info!("Database connection closed");
    }
}
