use crate::models::ServiceError;
use crate::repositories::SystemStatusRepository;
use crate::services::changes::{ChangeHub, TableChange};
use crate::services::status_service::StatusService;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Armed { end_time: DateTime<Utc> },
}

/// Admin-scheduled auto-deactivation. While armed, a once-per-second tick
/// checks the deadline; expiry persists `system_active = false`, clears the
/// schedule, and returns to idle.
#[derive(Clone)]
pub struct DeactivationTimer {
    repository: Arc<dyn SystemStatusRepository>,
    status: Arc<StatusService>,
    hub: Arc<ChangeHub>,
    state: Arc<RwLock<TimerState>>,
    running: Arc<RwLock<bool>>,
}

impl DeactivationTimer {
    pub fn new(
        repository: Arc<dyn SystemStatusRepository>,
        status: Arc<StatusService>,
        hub: Arc<ChangeHub>,
    ) -> Self {
        Self {
            repository,
            status,
            hub,
            state: Arc::new(RwLock::new(TimerState::Idle)),
            running: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn state(&self) -> TimerState {
        *self.state.read().await
    }

    pub async fn remaining_seconds(&self) -> Option<i64> {
        match *self.state.read().await {
            TimerState::Armed { end_time } => {
                Some((end_time - Utc::now()).num_seconds().max(0))
            }
            TimerState::Idle => None,
        }
    }

    /// Schedule deactivation `minutes` from now. The end time is persisted
    /// before the local state arms, so a failed write leaves nothing armed.
    pub async fn set_timer(&self, minutes: i64) -> Result<DateTime<Utc>, ServiceError> {
        if minutes <= 0 {
            return Err(ServiceError::ValidationError(
                "Timer minutes must be a positive number".to_string(),
            ));
        }

        let end_time = Utc::now() + ChronoDuration::minutes(minutes);
        self.repository.set_auto_deactivate_at(Some(end_time)).await?;

        *self.state.write().await = TimerState::Armed { end_time };
        self.hub.publish(TableChange::AdminSettings);
        tracing::info!("Auto-deactivation scheduled for {}", end_time);
        Ok(end_time)
    }

    /// Clear the schedule without touching `system_active`.
    pub async fn cancel(&self) -> Result<(), ServiceError> {
        self.repository.set_auto_deactivate_at(None).await?;

        *self.state.write().await = TimerState::Idle;
        self.hub.publish(TableChange::AdminSettings);
        tracing::info!("Auto-deactivation timer cancelled");
        Ok(())
    }

    /// Reconcile against the persisted end time on startup: a future end
    /// time resumes the countdown, a past one is a missed expiry and is
    /// performed immediately.
    pub async fn resume_from_store(&self) -> Result<(), ServiceError> {
        let status = self.repository.get().await?;

        match status.auto_deactivate_at {
            Some(end_time) if end_time > Utc::now() => {
                *self.state.write().await = TimerState::Armed { end_time };
                tracing::info!(
                    "Resumed auto-deactivation timer, {}s remaining",
                    (end_time - Utc::now()).num_seconds()
                );
            }
            Some(end_time) => {
                tracing::info!(
                    "Persisted auto-deactivation at {} already passed, expiring now",
                    end_time
                );
                self.expire().await;
            }
            None => {
                *self.state.write().await = TimerState::Idle;
            }
        }

        Ok(())
    }

    async fn expire(&self) {
        if let Err(e) = self.repository.clear_timer_and_deactivate().await {
            // Fail safe: the local view still goes inactive.
            tracing::error!("Failed to persist auto-deactivation: {}", e);
        }

        self.status.force_inactive_local().await;
        *self.state.write().await = TimerState::Idle;
        self.hub.publish(TableChange::AdminSettings);
        tracing::info!("System auto-deactivated");
    }

    /// One countdown evaluation at `now`.
    pub async fn tick(&self, now: DateTime<Utc>) {
        if let TimerState::Armed { end_time } = *self.state.read().await {
            if now >= end_time {
                self.expire().await;
            }
        }
    }

    pub async fn start(&self) {
        let mut running = self.running.write().await;
        if *running {
            tracing::info!("Deactivation timer already running");
            return;
        }

        *running = true;
        drop(running);

        let timer = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));

            while *timer.running.read().await {
                interval.tick().await;
                timer.tick(Utc::now()).await;
            }

            tracing::info!("Deactivation timer loop ended");
        });

        tracing::info!("Deactivation timer started");
    }

    pub async fn stop(&self) {
        let mut running = self.running.write().await;
        *running = false;
        tracing::info!("Deactivation timer stopped");
    }
}
