use crate::models::{BookingWithUser, TicketData};
use chrono::{DateTime, Utc};

/// Assembles the data the client-side renderer draws onto the ticket image.
/// The raster itself is produced in the browser, not here.
pub fn assemble_ticket(booking: &BookingWithUser, generated_at: DateTime<Utc>) -> TicketData {
    TicketData {
        booking_id: booking.id,
        team_lead_name: booking
            .team_lead_name
            .clone()
            .unwrap_or_else(|| booking.name.clone()),
        team_lead_roll_no: booking
            .team_lead_roll_no
            .clone()
            .unwrap_or_else(|| booking.roll_no.clone()),
        project_name: booking
            .project_name
            .clone()
            .unwrap_or_else(|| "Unknown Project".to_string()),
        slot_date: booking.slot_date,
        slot_time: booking.slot_time.clone(),
        department: booking.department.clone(),
        year: booking.year,
        user_name: booking.name.clone(),
        user_roll_no: booking.roll_no.clone(),
        user_email: booking.email.clone(),
        created_at: booking.created_at,
        generated_at,
    }
}
