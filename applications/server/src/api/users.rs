//! User API routes

use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use userd_core::{User, UserId};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// GET /users/:id
/// Fetch a single user by id
pub async fn get_user(
    Path(id): Path<UserId>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state.users.get_by_id(id).await?;
    Ok(Json(user))
}

/// GET /users
/// List all users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.users.get_all().await?;
    Ok(Json(users))
}

/// POST /register
/// Create a new user account
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = app_state
        .users
        .register(&req.username, &req.password)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// DELETE /users/:id
/// Delete a user by id
pub async fn delete_user(
    Path(id): Path<UserId>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    app_state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
