//! Database connection management and post repositories.

mod connections;
mod memory;

#[cfg(feature = "mongodb")]
pub mod entity;
#[cfg(feature = "mongodb")]
mod mongo_repo;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongodb")]
pub use connections::DatabaseConnection;
#[cfg(feature = "mongodb")]
pub use mongo_repo::MongoPostRepository;
