//! # studykit-db
//!
//! PostgreSQL document store layer for studykit.
//!
//! This crate provides:
//! - Connection pool management
//! - A JSONB-backed [`DocumentStore`] implementation with one logical
//!   collection per record kind
//! - An in-memory store used as a test double by the API crate
//!
//! ## Example
//!
//! ```rust,ignore
//! use studykit_db::Database;
//! use studykit_core::{DocumentStore, Note};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/studykit").await?;
//!
//!     let id = db
//!         .documents
//!         .insert(Note::COLLECTION, serde_json::json!({
//!             "title": "Ownership",
//!             "content": "Every value has a single owner.",
//!             "topic": "rust",
//!         }))
//!         .await?;
//!
//!     println!("Created note: {}", id);
//!     Ok(())
//! }
//! ```

pub mod documents;
pub mod memory;
pub mod pool;

// Re-export core types
pub use studykit_core::*;

pub use documents::{ListOrder, PgDocumentStore};
pub use memory::MemoryDocumentStore;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};

/// Combined database context.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Document store over the pool.
    pub documents: PgDocumentStore,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            documents: PgDocumentStore::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}
