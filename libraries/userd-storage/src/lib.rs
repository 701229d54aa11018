//! userd Storage
//!
//! `SQLite` database layer for the userd user service.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `users` module owns its own queries and logic
//! - **Trait Boundary**: [`SqliteUserStore`] implements the
//!   `userd_core::UserStore` trait so callers never see `sqlx` types
//! - **Embedded Migrations**: the schema is created on startup, no external
//!   migration step required
//!
//! # Example
//!
//! ```rust,no_run
//! use userd_storage::{create_pool, run_migrations, SqliteUserStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://userd.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteUserStore::new(pool);
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

// Vertical slices
pub mod users;

pub use error::StorageError;
pub use store::SqliteUserStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://userd.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal) // Use WAL mode for better concurrency
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
