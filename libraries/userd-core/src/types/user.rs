/// User domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, UserdError};

/// User identifier
pub type UserId = i64;

/// Minimum accepted username length, in bytes
pub const USERNAME_MIN_LEN: usize = 3;

/// Maximum accepted username length, in bytes
pub const USERNAME_MAX_LEN: usize = 12;

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name, unique across the service
    pub username: String,

    /// bcrypt hash of the password, never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Administrator flag
    pub admin: bool,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this account has administrator rights
    pub fn is_admin(&self) -> bool {
        self.admin
    }
}

/// Data for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login name
    pub username: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Administrator flag
    pub admin: bool,
}

/// Validate a user id
///
/// Ids are assigned by the database and are always positive.
pub fn validate_user_id(id: UserId) -> Result<()> {
    if id <= 0 {
        return Err(UserdError::invalid_input("user id is invalid"));
    }
    Ok(())
}

/// Validate a username against the accepted length bounds
///
/// Length is measured in bytes, so multi-byte characters count each byte
/// toward the bounds.
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(UserdError::invalid_input("username is empty"));
    }
    if username.len() < USERNAME_MIN_LEN {
        return Err(UserdError::invalid_input("username is too short"));
    }
    if username.len() > USERNAME_MAX_LEN {
        return Err(UserdError::invalid_input("username is too long"));
    }
    Ok(())
}
