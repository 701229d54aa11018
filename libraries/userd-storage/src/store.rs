use crate::users;
use async_trait::async_trait;
use sqlx::SqlitePool;
use userd_core::error::Result;
use userd_core::store::UserStore;
use userd_core::types::{CreateUser, User, UserId};

/// `SQLite`-backed implementation of the `UserStore` trait
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create_user(&self, user: CreateUser) -> Result<User> {
        Ok(users::create(&self.pool, user).await?)
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(users::get_by_id(&self.pool, id).await?)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(users::get_by_username(&self.pool, username).await?)
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        Ok(users::delete(&self.pool, id).await?)
    }
}
