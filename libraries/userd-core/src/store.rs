//! Persistence trait for user accounts

use crate::error::Result;
use crate::types::{CreateUser, User, UserId};
use async_trait::async_trait;

/// Storage operations for user accounts
///
/// This trait abstracts persistence so the service layer can run against
/// `SQLite` today and a different backend later without changes.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return the stored row
    async fn create_user(&self, user: CreateUser) -> Result<User>;

    /// Get a user by ID
    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Get a user by username
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Get all users
    async fn get_all_users(&self) -> Result<Vec<User>>;

    /// Delete a user by ID
    ///
    /// Deleting an id that matches no row is a not-found error, never a
    /// silent success.
    async fn delete_user(&self, id: UserId) -> Result<()>;
}
