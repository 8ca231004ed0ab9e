use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use serde_json;
use sqlx::SqlitePool;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::authenticate_request;
use crate::models::{
    ApiResponse, AutoDeactivateForm, ErrorResponse, HealthResponse, ServiceError,
    SystemStatusResponse,
};
use crate::services::{DeactivationTimer, StatusService};

#[utoipa::path(
    get,
    path = "/api/system-status",
    responses(
        (status = 200, description = "Current system status", body = SystemStatusResponse)
    ),
    security()
)]
pub async fn get_system_status(
    status_service: web::Data<StatusService>,
) -> Result<HttpResponse, ServiceError> {
    let status = status_service.load_or_current().await;
    let seconds_remaining = status
        .auto_deactivate_at
        .map(|at| (at - Utc::now()).num_seconds().max(0));

    Ok(HttpResponse::Ok().json(SystemStatusResponse {
        success: true,
        system_active: status.system_active,
        auto_deactivate_at: status.auto_deactivate_at,
        seconds_remaining,
    }))
}

#[utoipa::path(
    post,
    path = "/api/system/toggle",
    responses(
        (status = 200, description = "System status toggled"),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn toggle_system_api(
    status_service: web::Data<StatusService>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    if authenticate_request(&req, &jwt_manager).is_err() {
        return Err(ServiceError::AuthenticationError(
            "Not authenticated".to_string(),
        ));
    }

    let active = status_service.toggle().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "system_active": active,
        "message": if active { "Booking system activated" } else { "Booking system deactivated" }
    })))
}

#[utoipa::path(
    post,
    path = "/api/system/auto-deactivate",
    request_body = AutoDeactivateForm,
    responses(
        (status = 200, description = "Auto-deactivation timer armed"),
        (status = 400, description = "Minutes must be positive", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn set_auto_deactivate_api(
    timer: web::Data<DeactivationTimer>,
    form: web::Json<AutoDeactivateForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    if authenticate_request(&req, &jwt_manager).is_err() {
        return Err(ServiceError::AuthenticationError(
            "Not authenticated".to_string(),
        ));
    }

    let deactivate_at = timer.set_timer(form.minutes).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": format!("Timer set! System will deactivate in {} minutes", form.minutes),
        "deactivate_at": deactivate_at
    })))
}

#[utoipa::path(
    post,
    path = "/api/system/cancel-timer",
    responses(
        (status = 200, description = "Auto-deactivation timer cancelled", body = ApiResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn cancel_timer_api(
    timer: web::Data<DeactivationTimer>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    if authenticate_request(&req, &jwt_manager).is_err() {
        return Err(ServiceError::AuthenticationError(
            "Not authenticated".to_string(),
        ));
    }

    timer.cancel().await?;

    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Auto-deactivation timer cancelled".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "One-shot connectivity check", body = HealthResponse)
    ),
    security()
)]
pub async fn health_check(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ServiceError> {
    let database = sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(pool.get_ref())
        .await
        .is_ok();

    Ok(HttpResponse::Ok().json(HealthResponse {
        success: database,
        database,
        message: if database {
            "Database connection OK".to_string()
        } else {
            "Database connection failed".to_string()
        },
    }))
}
