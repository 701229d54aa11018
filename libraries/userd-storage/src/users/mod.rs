//! User account queries

use crate::error::StorageError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use userd_core::types::{CreateUser, User, UserId};

type Result<T> = std::result::Result<T, StorageError>;

/// Insert a new user
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `user` - Username, password hash, and admin flag to store
///
/// # Returns
///
/// Returns the stored row with its assigned id. Inserting a taken username
/// surfaces as [`StorageError::Duplicate`] via the unique index.
pub async fn create(pool: &SqlitePool, user: CreateUser) -> Result<User> {
    let now = Utc::now().timestamp();

    let result = sqlx::query(
        "INSERT INTO users (username, password, admin, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(user.admin)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| {
        if e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            StorageError::Duplicate(format!("user already exists: {}", user.username))
        } else {
            StorageError::Database(e)
        }
    })?;

    // Timestamps are stored at second precision; reconstruct from the bound
    // value so the returned row matches what a re-read would produce
    let created_at = timestamp(now)?;

    Ok(User {
        id: result.last_insert_rowid(),
        username: user.username,
        password_hash: user.password_hash,
        admin: user.admin,
        created_at,
        updated_at: created_at,
    })
}

/// Get a user by id
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query(
        "SELECT id, username, password, admin, created_at, updated_at
         FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(map_user).transpose()
}

/// Get a user by username
pub async fn get_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    let row = sqlx::query(
        "SELECT id, username, password, admin, created_at, updated_at
         FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(map_user).transpose()
}

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query(
        "SELECT id, username, password, admin, created_at, updated_at
         FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(map_user).collect()
}

/// Delete a user by id
///
/// Returns [`StorageError::NotFound`] when no row matches.
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("User", id));
    }

    Ok(())
}

fn map_user(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.get::<i64, _>("id"),
        username: row.get("username"),
        password_hash: row.get("password"),
        admin: row.get::<bool, _>("admin"),
        created_at: timestamp(row.get::<i64, _>("created_at"))?,
        updated_at: timestamp(row.get::<i64, _>("updated_at"))?,
    })
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| StorageError::CorruptRow(format!("invalid timestamp: {secs}")))
}
