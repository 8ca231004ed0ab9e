use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The singleton system status row. `auto_deactivate_at` is the scheduled
/// point at which the booking system is forced inactive, if any.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct SystemStatus {
    pub system_active: bool,
    pub auto_deactivate_at: Option<DateTime<Utc>>,
}

impl Default for SystemStatus {
    fn default() -> Self {
        Self {
            system_active: true,
            auto_deactivate_at: None,
        }
    }
}
