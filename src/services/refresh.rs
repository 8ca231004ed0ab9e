use crate::event_config::EventConfigStore;
use crate::models::{ServiceError, Slot};
use crate::services::availability::AvailabilityService;
use crate::services::changes::{ChangeHub, TableChange};
use crate::services::status_service::StatusService;
use chrono::Local;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};

const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(2);
const NOTIFY_DEBOUNCE: Duration = Duration::from_millis(250);
const RECV_CHECK_INTERVAL: Duration = Duration::from_millis(500);

struct SlotSnapshot {
    seq: u64,
    slots: Vec<Slot>,
}

/// Keeps the reconciled slot view current: change notifications trigger a
/// debounced reconciliation, a fixed 2-second status poll covers missed
/// notifications, and every pass carries a sequence stamp so a stale
/// response finishing after a newer one is discarded.
#[derive(Clone)]
pub struct RefreshCoordinator {
    availability: Arc<AvailabilityService>,
    status: Arc<StatusService>,
    hub: Arc<ChangeHub>,
    config_store: Arc<EventConfigStore>,
    snapshot: Arc<RwLock<SlotSnapshot>>,
    next_seq: Arc<AtomicU64>,
    running: Arc<RwLock<bool>>,
}

impl RefreshCoordinator {
    pub fn new(
        availability: Arc<AvailabilityService>,
        status: Arc<StatusService>,
        hub: Arc<ChangeHub>,
        config_store: Arc<EventConfigStore>,
    ) -> Self {
        Self {
            availability,
            status,
            hub,
            config_store,
            snapshot: Arc::new(RwLock::new(SlotSnapshot {
                seq: 0,
                slots: Vec::new(),
            })),
            next_seq: Arc::new(AtomicU64::new(0)),
            running: Arc::new(RwLock::new(false)),
        }
    }

    /// Last applied slot list.
    pub async fn current_slots(&self) -> Vec<Slot> {
        self.snapshot.read().await.slots.clone()
    }

    /// Run a reconciliation pass now and return the freshest applied view.
    /// A pass that lost the race to a newer one leaves the snapshot alone.
    pub async fn refresh_now(&self) -> Result<Vec<Slot>, ServiceError> {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let config = self.config_store.load();
        let slots = self
            .availability
            .snapshot(&config, Local::now().naive_local())
            .await;

        let mut snapshot = self.snapshot.write().await;
        if seq > snapshot.seq {
            snapshot.seq = seq;
            snapshot.slots = slots;
        }

        Ok(snapshot.slots.clone())
    }

    pub async fn start(&self) {
        let mut running = self.running.write().await;
        if *running {
            tracing::info!("Refresh coordinator already running");
            return;
        }

        *running = true;
        drop(running);

        // Initial fill so the first reader never sees an empty view.
        if let Err(e) = self.refresh_now().await {
            tracing::warn!("Initial slot reconciliation failed: {}", e);
        }

        // Change-notification listener with debounce.
        let coordinator = self.clone();
        tokio::spawn(async move {
            let mut rx = coordinator.hub.subscribe();

            while *coordinator.running.read().await {
                match tokio::time::timeout(RECV_CHECK_INTERVAL, rx.recv()).await {
                    Ok(Ok(change)) => {
                        coordinator.handle_change(change, &mut rx).await;
                    }
                    Ok(Err(broadcast::error::RecvError::Lagged(skipped))) => {
                        tracing::warn!("Change feed lagged by {} events, refreshing", skipped);
                        if let Err(e) = coordinator.status.load().await {
                            tracing::warn!("Failed to reload system status: {}", e);
                        }
                        if let Err(e) = coordinator.refresh_now().await {
                            tracing::warn!("Slot reconciliation failed: {}", e);
                        }
                    }
                    Ok(Err(broadcast::error::RecvError::Closed)) => break,
                    Err(_) => {} // nothing arrived; re-check the running flag
                }
            }

            tracing::info!("Refresh coordinator listener ended");
        });

        // Fixed-interval status poll, in case notifications are missed.
        let coordinator = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(STATUS_POLL_INTERVAL);

            while *coordinator.running.read().await {
                interval.tick().await;

                if let Err(e) = coordinator.status.load().await {
                    tracing::warn!("System status poll failed: {}", e);
                }
            }

            tracing::info!("Refresh coordinator poll ended");
        });

        tracing::info!("Refresh coordinator started");
    }

    async fn handle_change(
        &self,
        first: TableChange,
        rx: &mut broadcast::Receiver<TableChange>,
    ) {
        let mut reload_status = first == TableChange::AdminSettings;
        let mut reconcile = first == TableChange::Bookings;

        // Absorb the burst before reacting.
        let deadline = tokio::time::Instant::now() + NOTIFY_DEBOUNCE;
        while let Ok(Ok(change)) = tokio::time::timeout_at(deadline, rx.recv()).await {
            match change {
                TableChange::AdminSettings => reload_status = true,
                TableChange::Bookings => reconcile = true,
            }
        }

        if reload_status {
            if let Err(e) = self.status.load().await {
                tracing::warn!("Failed to reload system status: {}", e);
            }
        }
        if reconcile {
            if let Err(e) = self.refresh_now().await {
                tracing::warn!("Slot reconciliation failed: {}", e);
            }
        }
    }

    pub async fn stop(&self) {
        let mut running = self.running.write().await;
        *running = false;
        tracing::info!("Refresh coordinator stopped");
    }
}
