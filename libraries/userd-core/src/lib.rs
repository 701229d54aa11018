//! userd Core
//!
//! Domain types, validation, and error handling for the userd user service.
//!
//! This crate is I/O-free. It defines:
//! - **Domain Types**: `User`, `CreateUser`, and the validation rules
//!   enforced before anything touches storage
//! - **Core Traits**: the [`UserStore`] persistence trait implemented by the
//!   storage crate
//! - **Error Handling**: unified [`UserdError`] and [`Result`] types shared
//!   by every transport
//!
//! # Example
//!
//! ```rust
//! use userd_core::types::{validate_user_id, validate_username};
//!
//! assert!(validate_username("alice").is_ok());
//! assert!(validate_username("xy").is_err());
//! assert!(validate_user_id(42).is_ok());
//! assert!(validate_user_id(0).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, UserdError};
pub use store::UserStore;
pub use types::{
    validate_user_id, validate_username, CreateUser, User, UserId, USERNAME_MAX_LEN,
    USERNAME_MIN_LEN,
};
