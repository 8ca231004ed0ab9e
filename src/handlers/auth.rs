use actix_web::{web, HttpResponse, Result};
use serde_json;
use utoipa;

use crate::auth::{verify_jwt, JwtManager};
use crate::models::{
    AdminLoginForm, ApiResponse, ErrorResponse, LoginResponse, PasswordChangeForm, ServiceError,
};
use crate::services::AdminService;

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = AdminLoginForm,
    responses(
        (status = 200, description = "Login successful - JWT token returned in response body", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    security()
)]
pub async fn admin_login_api(
    admin_service: web::Data<AdminService>,
    form: web::Json<AdminLoginForm>,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    if admin_service
        .verify_credentials(&form.username, &form.password)
        .await?
    {
        let token = jwt_manager
            .generate_token(&form.username)
            .map_err(|_| ServiceError::InternalError("Failed to generate token".to_string()))?;

        return Ok(HttpResponse::Ok().json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            token,
            expires_in: 24 * 3600, // 24 hours in seconds
        }));
    }

    Err(ServiceError::AuthenticationError(
        "Invalid credentials".to_string(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses(
        (status = 200, description = "Logout successful", body = ApiResponse)
    ),
    security()
)]
pub async fn admin_logout_api() -> Result<HttpResponse, ServiceError> {
    // With JWT, logout is handled client-side by discarding the token
    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Logout successful - discard your token".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/change-password",
    request_body = PasswordChangeForm,
    responses(
        (status = 200, description = "Password changed successfully", body = ApiResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Authentication failed", body = ErrorResponse)
    )
)]
pub async fn change_password_api(
    admin_service: web::Data<AdminService>,
    form: web::Json<PasswordChangeForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    let claims = verify_jwt(&req, &jwt_manager)
        .map_err(|_| ServiceError::AuthenticationError("Not authenticated".to_string()))?;

    if form.current_password.is_empty()
        || form.new_password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(ServiceError::ValidationError(
            "All fields are required".to_string(),
        ));
    }

    if form.new_password != form.confirm_password {
        return Err(ServiceError::ValidationError(
            "New passwords do not match".to_string(),
        ));
    }

    if form.new_password.len() < 4 {
        return Err(ServiceError::ValidationError(
            "New password must be at least 4 characters long".to_string(),
        ));
    }

    admin_service
        .change_password(&claims.sub, &form.current_password, &form.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Password updated successfully"
    })))
}
