//! Application state

use crate::services::auth::AuthService;
use crate::services::users::UserService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// User management service
    pub users: Arc<UserService>,
    /// Authentication service
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Create new application state
    pub fn new(users: Arc<UserService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            users,
            auth_service,
        }
    }
}
