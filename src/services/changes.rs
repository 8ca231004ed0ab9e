use tokio::sync::broadcast;

/// Tables whose writes are announced on the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableChange {
    Bookings,
    AdminSettings,
}

/// In-process change feed over the backing tables. Write paths publish after
/// a successful commit; the refresh coordinator subscribes.
pub struct ChangeHub {
    tx: broadcast::Sender<TableChange>,
}

impl ChangeHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    pub fn publish(&self, change: TableChange) {
        // No subscribers is fine; the poll fallback still catches up.
        let _ = self.tx.send(change);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TableChange> {
        self.tx.subscribe()
    }
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new()
    }
}
