//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! so every pooled connection sees the same database as the one that ran the
//! migrations.

use sqlx::SqlitePool;
use tempfile::TempDir;
use userd_core::types::CreateUser;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = userd_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        // Run migrations
        userd_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: build a `CreateUser` with a placeholder hash
pub fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: "$2b$12$placeholderplaceholderpl".to_string(),
        admin: false,
    }
}
