use actix_web::{web, HttpResponse, Result};
use serde_json;
use utoipa;

use crate::auth::JwtManager;
use crate::event_config::EventConfigStore;
use crate::middleware::auth::authenticate_request;
use crate::models::{ErrorResponse, EventConfig, ServiceError};

#[utoipa::path(
    get,
    path = "/api/event-config",
    responses(
        (status = 200, description = "Current event configuration")
    ),
    security()
)]
pub async fn get_event_config(
    config_store: web::Data<EventConfigStore>,
) -> Result<HttpResponse, ServiceError> {
    let config = config_store.load();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "config": config
    })))
}

#[utoipa::path(
    post,
    path = "/api/admin/event-config",
    responses(
        (status = 200, description = "Event configuration saved"),
        (status = 400, description = "Configuration fails validation", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn update_event_config(
    config_store: web::Data<EventConfigStore>,
    form: web::Json<EventConfig>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    if authenticate_request(&req, &jwt_manager).is_err() {
        return Err(ServiceError::AuthenticationError(
            "Not authenticated".to_string(),
        ));
    }

    config_store.save(&form)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Event configuration saved"
    })))
}
