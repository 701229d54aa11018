/// Common test utilities and fixtures
use axum::Router;
use std::sync::Arc;
use tempfile::TempDir;
use userd_server::{
    api,
    services::{AuthService, UserService},
    state::AppState,
};
use userd_storage::SqliteUserStore;

/// Create a file-backed test database with migrations applied.
///
/// The pool opens several connections, and a plain `:memory:` database
/// would give each connection its own empty copy, so tests use a real
/// file inside a temp directory instead.
pub async fn create_test_store() -> (Arc<SqliteUserStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("userd-test.db");
    let database_url = format!("sqlite://{}", db_path.display());

    let pool = userd_storage::create_pool(&database_url).await.unwrap();
    userd_storage::run_migrations(&pool).await.unwrap();

    (Arc::new(SqliteUserStore::new(pool)), temp_dir)
}

/// Create the full service stack over a fresh database
pub async fn create_test_services() -> (Arc<UserService>, Arc<AuthService>, TempDir) {
    let (store, temp_dir) = create_test_store().await;

    let auth_service = Arc::new(AuthService::new(
        "test-secret-key".to_string(),
        1, // 1 hour access
        1, // 1 day refresh
    ));
    let users = Arc::new(UserService::new(store, Arc::clone(&auth_service)));

    (users, auth_service, temp_dir)
}

/// Helper to create the test app router with real services behind it
pub async fn create_test_app() -> (Router, Arc<UserService>, Arc<AuthService>, TempDir) {
    let (users, auth_service, temp_dir) = create_test_services().await;

    let app_state = AppState::new(Arc::clone(&users), Arc::clone(&auth_service));
    let app = api::create_router(app_state);

    (app, users, auth_service, temp_dir)
}

/// Test user credentials
pub mod fixtures {
    pub const TEST_USERNAME: &str = "testuser";
    pub const TEST_PASSWORD: &str = "TestPassword123!";

    pub const ADMIN_USERNAME: &str = "admin";
    pub const ADMIN_PASSWORD: &str = "AdminPassword456!";
}
