use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// One entry of the expanded slot catalog: a bookable (date, time-range)
/// unit before any availability information is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDef {
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
}

/// A catalog slot with its reconciled booking state. Rebuilt wholesale on
/// every reconciliation pass, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Slot {
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
    pub is_available: bool,
    pub booked_by: Option<String>,
    pub project_name: Option<String>,
}
