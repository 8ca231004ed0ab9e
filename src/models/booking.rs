use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Database entity representing a placed booking
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct BookingRecord {
    pub id: i64,
    pub user_id: i64,
    pub slot_id: Option<String>,
    pub slot_date: NaiveDate,
    pub slot_time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Booking row joined with the occupant's account fields
#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct BookingWithUser {
    pub id: i64,
    pub user_id: i64,
    pub slot_id: Option<String>,
    pub slot_date: NaiveDate,
    pub slot_time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub roll_no: String,
    pub department: String,
    pub email: String,
    pub year: i64,
    pub team_lead_name: Option<String>,
    pub team_lead_roll_no: Option<String>,
    pub project_name: Option<String>,
}

/// Team details submitted with a booking; written to the student's profile
/// in the same transaction as the booking row.
#[derive(Debug, Clone)]
pub struct TeamProfile {
    pub team_lead_name: String,
    pub team_lead_roll_no: String,
    pub project_name: String,
}
