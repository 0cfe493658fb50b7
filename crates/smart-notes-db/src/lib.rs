//! # smart-notes-db
//!
//! PostgreSQL storage layer for smart-notes.
//!
//! This crate provides:
//! - Connection pool management
//! - `PgNoteRepository`, the PostgreSQL implementation of `NoteRepository`
//! - `InMemoryNoteRepository`, a process-local implementation for tests
//!
//! ## Example
//!
//! ```rust,ignore
//! use smart_notes_db::{Database, NoteRepository, CreateNoteRequest, PoolConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect_with_config(
//!         "postgres://localhost/smart_notes",
//!         PoolConfig::new().max_connections(5),
//!     )
//!     .await?;
//!
//!     let note = db.notes.insert(CreateNoteRequest {
//!         title: "Hello".to_string(),
//!         content: "Hello, world!".to_string(),
//!         tags: Some(vec!["greeting".to_string()]),
//!     }, chrono::Utc::now()).await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```
pub mod memory;
pub mod notes;
pub mod pool;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use smart_notes_core::*;

pub use memory::InMemoryNoteRepository;
pub use notes::PgNoteRepository;
pub use pool::{create_pool_with_config, PoolConfig};

/// Combined database context.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Note repository for CRUD operations.
    pub notes: PgNoteRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            pool,
        }
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
}
