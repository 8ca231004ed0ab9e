use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use utoipa;

use crate::models::{
    BookSlotForm, BookingResponse, ErrorResponse, MyBookingResponse, ServiceError, SlotsResponse,
    TicketResponse,
};
use crate::services::ticket::assemble_ticket;
use crate::services::{BookingService, RefreshCoordinator, StatusService};

#[utoipa::path(
    get,
    path = "/api/slots",
    responses(
        (status = 200, description = "Reconciled slot list", body = SlotsResponse)
    ),
    security()
)]
pub async fn get_slots(
    coordinator: web::Data<RefreshCoordinator>,
    status_service: web::Data<StatusService>,
) -> Result<HttpResponse, ServiceError> {
    let slots = coordinator.refresh_now().await?;
    let status = status_service.load_or_current().await;

    Ok(HttpResponse::Ok().json(SlotsResponse {
        success: true,
        system_active: status.system_active,
        slots,
    }))
}

#[utoipa::path(
    post,
    path = "/api/book",
    request_body = BookSlotForm,
    responses(
        (status = 200, description = "Slot booked", body = BookingResponse),
        (status = 400, description = "System closed or enrollment window closed", body = ErrorResponse),
        (status = 409, description = "Slot taken or user already booked", body = ErrorResponse)
    ),
    security()
)]
pub async fn book_slot_api(
    booking_service: web::Data<BookingService>,
    form: web::Json<BookSlotForm>,
) -> Result<HttpResponse, ServiceError> {
    let booking = booking_service.place_booking(&form).await?;

    Ok(HttpResponse::Ok().json(BookingResponse {
        success: true,
        message: "Slot booked successfully".to_string(),
        booking,
    }))
}

#[utoipa::path(
    get,
    path = "/api/my-booking/{user_id}",
    params(
        ("user_id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "The student's booking, if any", body = MyBookingResponse)
    ),
    security()
)]
pub async fn get_my_booking(
    booking_service: web::Data<BookingService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = path.into_inner();
    let booking = booking_service.booking_for_user(user_id).await?;

    Ok(HttpResponse::Ok().json(MyBookingResponse {
        success: true,
        booking,
    }))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}/ticket",
    params(
        ("id" = i64, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Ticket data for client-side rendering", body = TicketResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse)
    ),
    security()
)]
pub async fn get_ticket_data(
    booking_service: web::Data<BookingService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let booking_id = path.into_inner();
    let booking = booking_service
        .booking_with_user(booking_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Booking not found".to_string()))?;

    Ok(HttpResponse::Ok().json(TicketResponse {
        success: true,
        ticket: assemble_ticket(&booking, Utc::now()),
    }))
}
