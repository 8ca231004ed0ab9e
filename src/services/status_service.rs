use crate::models::{ServiceError, SystemStatus};
use crate::repositories::SystemStatusRepository;
use crate::services::changes::{ChangeHub, TableChange};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Owns the in-memory copy of the singleton system status and the
/// load/persist boundary around it. Local state is only committed after a
/// confirmed write.
pub struct StatusService {
    repository: Arc<dyn SystemStatusRepository>,
    hub: Arc<ChangeHub>,
    cached: RwLock<SystemStatus>,
}

impl StatusService {
    pub fn new(repository: Arc<dyn SystemStatusRepository>, hub: Arc<ChangeHub>) -> Self {
        Self {
            repository,
            hub,
            cached: RwLock::new(SystemStatus::default()),
        }
    }

    /// Fetch the persisted status, refreshing the cache.
    pub async fn load(&self) -> Result<SystemStatus, ServiceError> {
        let status = self.repository.get().await?;
        *self.cached.write().await = status.clone();
        Ok(status)
    }

    /// Last successfully loaded status.
    pub async fn current(&self) -> SystemStatus {
        self.cached.read().await.clone()
    }

    /// Best-effort load: a failed fetch keeps the previous state engaged.
    pub async fn load_or_current(&self) -> SystemStatus {
        match self.load().await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Failed to load system status: {}", e);
                self.current().await
            }
        }
    }

    pub async fn toggle(&self) -> Result<bool, ServiceError> {
        let current = self.repository.get().await?;
        let next = !current.system_active;

        self.repository.set_active(next).await?;

        self.cached.write().await.system_active = next;
        self.hub.publish(TableChange::AdminSettings);
        tracing::info!("System status toggled to active={}", next);
        Ok(next)
    }

    /// Fail-safe path for timer expiry when the persisting write failed:
    /// the local view still goes inactive.
    pub async fn force_inactive_local(&self) {
        let mut cached = self.cached.write().await;
        cached.system_active = false;
        cached.auto_deactivate_at = None;
    }
}
