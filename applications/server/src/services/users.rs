//! User management service
//!
//! Validation and orchestration shared by the REST and gRPC transports.
//! Both transports call through this service so rules like username
//! length checks are enforced in exactly one place.

use crate::error::{Result, ServerError};
use crate::services::auth::AuthService;
use std::sync::Arc;
use userd_core::{
    validate_user_id, validate_username, CreateUser, User, UserId, UserStore, UserdError,
};

/// User management service
pub struct UserService {
    store: Arc<dyn UserStore>,
    auth: Arc<AuthService>,
}

impl UserService {
    /// Create a new user service over the given store
    pub fn new(store: Arc<dyn UserStore>, auth: Arc<AuthService>) -> Self {
        Self { store, auth }
    }

    /// Fetch a user by id, rejecting non-positive ids
    pub async fn get_by_id(&self, id: UserId) -> Result<User> {
        validate_user_id(id)?;

        self.store
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| UserdError::not_found("User", id).into())
    }

    /// Fetch a user by username
    pub async fn get_by_username(&self, username: &str) -> Result<User> {
        self.store
            .get_user_by_username(username)
            .await?
            .ok_or_else(|| UserdError::not_found("User", username).into())
    }

    /// List all users
    pub async fn get_all(&self) -> Result<Vec<User>> {
        Ok(self.store.get_all_users().await?)
    }

    /// Register a new regular user
    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        self.create(username, password, false).await
    }

    /// Create a user with an explicit admin flag
    pub async fn create(&self, username: &str, password: &str, admin: bool) -> Result<User> {
        validate_username(username)?;
        if password.is_empty() {
            return Err(ServerError::BadRequest("password is empty".to_string()));
        }

        let password_hash = self.auth.hash_password(password)?;
        let user = self
            .store
            .create_user(CreateUser {
                username: username.to_string(),
                password_hash,
                admin,
            })
            .await?;

        tracing::info!(id = user.id, username = %user.username, "Created user");
        Ok(user)
    }

    /// Delete a user by id. Deleting an unknown id is an error, not a no-op.
    pub async fn delete(&self, id: UserId) -> Result<()> {
        validate_user_id(id)?;
        self.store.delete_user(id).await?;

        tracing::info!(id, "Deleted user");
        Ok(())
    }

    /// Check a username/password pair and return the matching user.
    ///
    /// An unknown username and a wrong password produce the same error so
    /// callers cannot probe which usernames exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let user = self
            .store
            .get_user_by_username(username)
            .await?
            .ok_or(UserdError::InvalidCredentials)?;

        if !self.auth.verify_password(password, &user.password_hash)? {
            return Err(UserdError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
