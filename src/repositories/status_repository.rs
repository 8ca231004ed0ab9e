use crate::models::{ServiceError, SystemStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

#[async_trait]
pub trait SystemStatusRepository: Send + Sync {
    async fn get(&self) -> Result<SystemStatus, ServiceError>;
    async fn set_active(&self, active: bool) -> Result<(), ServiceError>;
    async fn set_auto_deactivate_at(
        &self,
        at: Option<DateTime<Utc>>,
    ) -> Result<(), ServiceError>;
    /// Single write for timer expiry: deactivate and clear the schedule.
    async fn clear_timer_and_deactivate(&self) -> Result<(), ServiceError>;
}

pub struct SqliteSystemStatusRepository {
    pool: SqlitePool,
}

impl SqliteSystemStatusRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SystemStatusRepository for SqliteSystemStatusRepository {
    async fn get(&self) -> Result<SystemStatus, ServiceError> {
        let status = sqlx::query_as::<_, SystemStatus>(
            "SELECT system_active, auto_deactivate_at FROM admin_settings WHERE id = 1",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(status)
    }

    async fn set_active(&self, active: bool) -> Result<(), ServiceError> {
        sqlx::query("UPDATE admin_settings SET system_active = ?, updated_at = ? WHERE id = 1")
            .bind(active)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn set_auto_deactivate_at(
        &self,
        at: Option<DateTime<Utc>>,
    ) -> Result<(), ServiceError> {
        sqlx::query("UPDATE admin_settings SET auto_deactivate_at = ?, updated_at = ? WHERE id = 1")
            .bind(at)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn clear_timer_and_deactivate(&self) -> Result<(), ServiceError> {
        sqlx::query(
            "UPDATE admin_settings SET system_active = 0, auto_deactivate_at = NULL, updated_at = ? WHERE id = 1",
        )
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
