use crate::models::ServiceError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_password_hash(&self, username: &str) -> Result<Option<String>, ServiceError>;
    async fn upsert_password_hash(
        &self,
        username: &str,
        hash: &str,
    ) -> Result<(), ServiceError>;
}

pub struct SqliteAdminRepository {
    pool: SqlitePool,
}

impl SqliteAdminRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for SqliteAdminRepository {
    async fn find_password_hash(&self, username: &str) -> Result<Option<String>, ServiceError> {
        let hash = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM admin_users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(hash)
    }

    async fn upsert_password_hash(
        &self,
        username: &str,
        hash: &str,
    ) -> Result<(), ServiceError> {
        sqlx::query(
            "INSERT INTO admin_users (username, password_hash, updated_at) VALUES (?, ?, ?)
             ON CONFLICT (username) DO UPDATE SET password_hash = excluded.password_hash, updated_at = excluded.updated_at",
        )
        .bind(username)
        .bind(hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
