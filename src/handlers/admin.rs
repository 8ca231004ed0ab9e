use actix_web::{web, HttpResponse, Result};
use serde_json;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::authenticate_request;
use crate::models::{AdminBookingsResponse, AdminSlotsResponse, ErrorResponse, ServiceError};
use crate::services::BookingService;

#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    responses(
        (status = 200, description = "All bookings with occupant details, newest first", body = AdminBookingsResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn get_admin_bookings(
    booking_service: web::Data<BookingService>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    if authenticate_request(&req, &jwt_manager).is_err() {
        return Err(ServiceError::AuthenticationError(
            "Not authenticated".to_string(),
        ));
    }

    let bookings = booking_service.admin_bookings().await?;

    Ok(HttpResponse::Ok().json(AdminBookingsResponse {
        success: true,
        bookings,
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/bookings/delete/{id}",
    params(
        ("id" = i64, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking removed"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse)
    )
)]
pub async fn delete_booking(
    booking_service: web::Data<BookingService>,
    path: web::Path<i64>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    if authenticate_request(&req, &jwt_manager).is_err() {
        return Err(ServiceError::AuthenticationError(
            "Not authenticated".to_string(),
        ));
    }

    let booking_id = path.into_inner();
    let message = booking_service.remove_booking(booking_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": message
    })))
}

#[utoipa::path(
    get,
    path = "/api/admin/slots",
    responses(
        (status = 200, description = "Full slot grid with occupant details", body = AdminSlotsResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn get_admin_slots(
    booking_service: web::Data<BookingService>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    if authenticate_request(&req, &jwt_manager).is_err() {
        return Err(ServiceError::AuthenticationError(
            "Not authenticated".to_string(),
        ));
    }

    let slots = booking_service.admin_slots().await?;

    Ok(HttpResponse::Ok().json(AdminSlotsResponse {
        success: true,
        slots,
    }))
}
