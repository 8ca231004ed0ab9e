use std::collections::BTreeMap;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "IRP Booking API",
        description = "Slot booking backend for the Innovation & Research Park review event"
    ),
    paths(
        crate::handlers::auth::admin_login_api,
        crate::handlers::auth::admin_logout_api,
        crate::handlers::auth::change_password_api,
        crate::handlers::users::register_api,
        crate::handlers::users::sign_in_api,
        crate::handlers::booking::get_slots,
        crate::handlers::booking::book_slot_api,
        crate::handlers::booking::get_my_booking,
        crate::handlers::booking::get_ticket_data,
        crate::handlers::admin::get_admin_bookings,
        crate::handlers::admin::delete_booking,
        crate::handlers::admin::get_admin_slots,
        crate::handlers::config::get_event_config,
        crate::handlers::config::update_event_config,
        crate::handlers::system::get_system_status,
        crate::handlers::system::toggle_system_api,
        crate::handlers::system::set_auto_deactivate_api,
        crate::handlers::system::cancel_timer_api,
        crate::handlers::system::health_check,
    ),
    components(schemas(
        crate::models::AdminLoginForm,
        crate::models::PasswordChangeForm,
        crate::models::RegisterForm,
        crate::models::SignInForm,
        crate::models::BookSlotForm,
        crate::models::AutoDeactivateForm,
        crate::models::ApiResponse,
        crate::models::ErrorResponse,
        crate::models::LoginResponse,
        crate::models::SlotsResponse,
        crate::models::BookingResponse,
        crate::models::MyBookingResponse,
        crate::models::TicketResponse,
        crate::models::TicketData,
        crate::models::AdminBookingsResponse,
        crate::models::AdminSlotsResponse,
        crate::models::AdminSlotData,
        crate::models::AdminSlotBooking,
        crate::models::SystemStatusResponse,
        crate::models::HealthResponse,
        crate::models::Slot,
        crate::models::BookingRecord,
        crate::models::BookingWithUser,
        crate::models::Student,
        crate::models::SystemStatus,
    ))
)]
pub struct ApiDoc;

pub fn configure_openapi(mut openapi: utoipa::openapi::OpenApi) -> utoipa::openapi::OpenApi {
    // Add Bearer token security scheme (HTTP Bearer type, not ApiKey)
    let mut security_schemes = BTreeMap::new();
    security_schemes.insert(
        "bearer_auth".to_string(),
        SecurityScheme::Http(
            HttpBuilder::new()
                .scheme(HttpAuthScheme::Bearer)
                .bearer_format("JWT")
                .description(Some("JWT token authorization"))
                .build(),
        ),
    );

    if let Some(components) = openapi.components.as_mut() {
        components.security_schemes = security_schemes;
    }

    // Global security requirement; public endpoints override it with security()
    openapi.security = Some(vec![
        utoipa::openapi::security::SecurityRequirement::new("bearer_auth", Vec::<String>::new()),
    ]);

    openapi
}
