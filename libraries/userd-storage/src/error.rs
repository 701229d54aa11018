/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
        /// Identifier that matched nothing
        id: String,
    },

    /// Unique constraint violation
    #[error("{0}")]
    Duplicate(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Invalid row contents (e.g. an out-of-range timestamp)
    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

impl From<StorageError> for userd_core::UserdError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => userd_core::UserdError::NotFound { entity, id },
            StorageError::Duplicate(msg) => userd_core::UserdError::Duplicate(msg),
            other => userd_core::UserdError::storage(other.to_string()),
        }
    }
}
