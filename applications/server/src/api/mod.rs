//! HTTP API routes and handlers

pub mod auth;
pub mod health;
pub mod users;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Per-request deadline covering all routes
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Build the REST router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list_users))
        .route(
            "/users/:id",
            get(users::get_user).delete(users::delete_user),
        )
        .route("/register", post(users::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/healthz", get(health::healthz))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
