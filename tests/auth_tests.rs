use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::TestApp;

#[actix_web::test]
async fn test_admin_login_success() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "username": "admin", "password": "admin" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn test_admin_login_wrong_password() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "username": "admin", "password": "wrong" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_admin_login_unknown_user() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "username": "root", "password": "admin" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_admin_routes_require_token() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let get_routes = ["/api/admin/bookings", "/api/admin/slots"];
    for uri in get_routes {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "GET {}", uri);
    }

    let req = test::TestRequest::post()
        .uri("/api/system/toggle")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::post()
        .uri("/api/system/cancel-timer")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_change_password_validations() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token().await;

    // Mismatched confirmation
    let req = test::TestRequest::post()
        .uri("/api/admin/change-password")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "current_password": "admin",
            "new_password": "newpass",
            "confirm_password": "other"
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    // Too short
    let req = test::TestRequest::post()
        .uri("/api/admin/change-password")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "current_password": "admin",
            "new_password": "abc",
            "confirm_password": "abc"
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    // Wrong current password
    let req = test::TestRequest::post()
        .uri("/api/admin/change-password")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "current_password": "nope",
            "new_password": "newpass",
            "confirm_password": "newpass"
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_change_password_then_login_with_new_one() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token().await;

    let req = test::TestRequest::post()
        .uri("/api/admin/change-password")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "current_password": "admin",
            "new_password": "newpass",
            "confirm_password": "newpass"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Old password no longer works
    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "username": "admin", "password": "admin" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    // New one does
    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "username": "admin", "password": "newpass" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
