use crate::models::booking::{BookingRecord, BookingWithUser};
use crate::models::slot::Slot;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// REQUEST TYPES
// =============================================================================

#[derive(Deserialize, ToSchema)]
pub struct RegisterForm {
    pub name: String,
    pub roll_no: String,
    pub department: String,
    pub email: String,
    pub year: i64,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct BookSlotForm {
    pub user_id: i64,
    pub slot_id: String,
    pub team_lead_name: String,
    pub team_lead_roll_no: String,
    pub project_name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AdminLoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AutoDeactivateForm {
    pub minutes: i64,
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

// Common response types
#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

// Authentication responses
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub expires_in: u64, // seconds
}

// Booking flow responses
#[derive(Serialize, ToSchema)]
pub struct SlotsResponse {
    pub success: bool,
    pub system_active: bool,
    pub slots: Vec<Slot>,
}

#[derive(Serialize, ToSchema)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    pub booking: BookingRecord,
}

#[derive(Serialize, ToSchema)]
pub struct MyBookingResponse {
    pub success: bool,
    pub booking: Option<BookingWithUser>,
}

// System status responses
#[derive(Serialize, ToSchema)]
pub struct SystemStatusResponse {
    pub success: bool,
    pub system_active: bool,
    pub auto_deactivate_at: Option<DateTime<Utc>>,
    pub seconds_remaining: Option<i64>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub database: bool,
    pub message: String,
}

// Admin views
#[derive(Serialize, ToSchema)]
pub struct AdminBookingsResponse {
    pub success: bool,
    pub bookings: Vec<BookingWithUser>,
}

#[derive(Serialize, ToSchema)]
pub struct AdminSlotBooking {
    pub booking_id: i64,
    pub booked_by: String,
    pub project_name: Option<String>,
    pub team_lead_name: Option<String>,
    pub team_lead_roll_no: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AdminSlotData {
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
    pub is_available: bool,
    pub booking_info: Option<AdminSlotBooking>,
}

#[derive(Serialize, ToSchema)]
pub struct AdminSlotsResponse {
    pub success: bool,
    pub slots: Vec<AdminSlotData>,
}

// Ticket data, assembled server-side; the client renders the actual image
#[derive(Serialize, ToSchema)]
pub struct TicketData {
    pub booking_id: i64,
    pub team_lead_name: String,
    pub team_lead_roll_no: String,
    pub project_name: String,
    pub slot_date: NaiveDate,
    pub slot_time: String,
    pub department: String,
    pub year: i64,
    pub user_name: String,
    pub user_roll_no: String,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct TicketResponse {
    pub success: bool,
    pub ticket: TicketData,
}
