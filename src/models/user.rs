use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Database entity representing a student account
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub roll_no: String,
    pub department: String,
    pub email: String,
    pub year: i64,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub team_lead_name: Option<String>,
    pub team_lead_roll_no: Option<String>,
    pub project_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a student account
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub roll_no: String,
    pub department: String,
    pub email: String,
    pub year: i64,
    pub password: Option<String>,
}
