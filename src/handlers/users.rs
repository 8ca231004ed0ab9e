use actix_web::{web, HttpResponse, Result};
use serde_json;
use utoipa;

use crate::models::{ErrorResponse, RegisterForm, ServiceError, SignInForm};
use crate::services::StudentService;

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterForm,
    responses(
        (status = 200, description = "Account created successfully"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Roll number or email already registered", body = ErrorResponse)
    ),
    security()
)]
pub async fn register_api(
    student_service: web::Data<StudentService>,
    form: web::Json<RegisterForm>,
) -> Result<HttpResponse, ServiceError> {
    let student = student_service.register(&form).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Account created successfully",
        "user": student
    })))
}

#[utoipa::path(
    post,
    path = "/api/signin",
    request_body = SignInForm,
    responses(
        (status = 200, description = "Signed in"),
        (status = 401, description = "Unknown email or wrong password", body = ErrorResponse)
    ),
    security()
)]
pub async fn sign_in_api(
    student_service: web::Data<StudentService>,
    form: web::Json<SignInForm>,
) -> Result<HttpResponse, ServiceError> {
    let student = student_service.sign_in(&form.email, &form.password).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Signed in successfully",
        "user": student
    })))
}
