//! Domain types for userd

mod user;

pub use user::{
    validate_user_id, validate_username, CreateUser, User, UserId, USERNAME_MAX_LEN,
    USERNAME_MIN_LEN,
};
