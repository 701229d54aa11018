//! Integration tests for the users vertical slice
//!
//! Covers the schema constraints and query behavior:
//! - Insert and read-back with assigned ids
//! - Unique username enforcement
//! - Missing rows reported as None / not-found, never silent

mod test_helpers;

use test_helpers::*;
use userd_core::store::UserStore;
use userd_core::UserdError;
use userd_storage::{users, SqliteUserStore, StorageError};

#[tokio::test]
async fn test_create_and_fetch_user_by_id() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let created = users::create(pool, new_user("alice"))
        .await
        .expect("Failed to create user");

    assert!(created.id > 0);
    assert_eq!(created.username, "alice");
    assert!(!created.admin);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = users::get_by_id(pool, created.id)
        .await
        .expect("Failed to fetch user")
        .expect("User should exist");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_fetch_user_by_username() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let created = users::create(pool, new_user("bob"))
        .await
        .expect("Failed to create user");

    let fetched = users::get_by_username(pool, "bob")
        .await
        .expect("Failed to fetch user")
        .expect("User should exist");

    assert_eq!(fetched.id, created.id);

    let missing = users::get_by_username(pool, "nobody")
        .await
        .expect("Query should succeed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_fetch_missing_user_returns_none() {
    let test_db = TestDb::new().await;

    let missing = users::get_by_id(test_db.pool(), 9999)
        .await
        .expect("Query should succeed");

    assert!(missing.is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    users::create(pool, new_user("carol"))
        .await
        .expect("First insert should succeed");

    let err = users::create(pool, new_user("carol"))
        .await
        .expect_err("Second insert should hit the unique index");

    assert!(matches!(err, StorageError::Duplicate(_)));
}

#[tokio::test]
async fn test_get_all_users_ordered_by_id() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    for name in ["carol", "alice", "bob"] {
        users::create(pool, new_user(name))
            .await
            .expect("Failed to create user");
    }

    let all = users::get_all(pool).await.expect("Failed to list users");

    assert_eq!(all.len(), 3);
    // Insertion order, not lexicographic
    let names: Vec<&str> = all.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["carol", "alice", "bob"]);
}

#[tokio::test]
async fn test_delete_user() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let created = users::create(pool, new_user("dave"))
        .await
        .expect("Failed to create user");

    users::delete(pool, created.id)
        .await
        .expect("Delete should succeed");

    let gone = users::get_by_id(pool, created.id)
        .await
        .expect("Query should succeed");
    assert!(gone.is_none());
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let test_db = TestDb::new().await;

    let err = users::delete(test_db.pool(), 9999)
        .await
        .expect_err("Deleting a missing id should fail");

    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn test_admin_flag_round_trips() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let mut user = new_user("root");
    user.admin = true;

    let created = users::create(pool, user).await.expect("Failed to create");
    let fetched = users::get_by_id(pool, created.id)
        .await
        .expect("Failed to fetch")
        .expect("User should exist");

    assert!(fetched.admin);
    assert!(fetched.is_admin());
}

#[tokio::test]
async fn test_store_trait_maps_errors_to_core() {
    let test_db = TestDb::new().await;
    let store = SqliteUserStore::new(test_db.pool().clone());

    let created = store
        .create_user(new_user("erin"))
        .await
        .expect("Failed to create through the trait");

    let fetched = store
        .get_user_by_id(created.id)
        .await
        .expect("Failed to fetch through the trait");
    assert_eq!(fetched.as_ref().map(|u| u.id), Some(created.id));

    let err = store
        .delete_user(9999)
        .await
        .expect_err("Deleting a missing id should fail");
    assert!(matches!(err, UserdError::NotFound { .. }));

    let err = store
        .create_user(new_user("erin"))
        .await
        .expect_err("Duplicate username should fail");
    assert!(matches!(err, UserdError::Duplicate(_)));
}
