use actix_web::{http::StatusCode, test};
use serde_json::json;

use irp_booking_backend::repositories::SystemStatusRepository;

mod common;
use common::{test_event_config, TestApp};

#[actix_web::test]
async fn test_system_status_is_public_and_active_by_default() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/system-status").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["system_active"], true);
    assert!(body["auto_deactivate_at"].is_null());
    assert!(body["seconds_remaining"].is_null());
}

#[actix_web::test]
async fn test_toggle_flips_and_persists() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token().await;

    let req = test::TestRequest::post()
        .uri("/api/system/toggle")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["system_active"], false);

    let status = test_app.status_repository.get().await.unwrap();
    assert!(!status.system_active);

    // Toggle back
    let req = test::TestRequest::post()
        .uri("/api/system/toggle")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["system_active"], true);
    assert!(test_app.status_repository.get().await.unwrap().system_active);
}

#[actix_web::test]
async fn test_auto_deactivate_rejects_non_positive_minutes() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token().await;

    for minutes in [0, -5] {
        let req = test::TestRequest::post()
            .uri("/api/system/auto-deactivate")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({ "minutes": minutes }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    let status = test_app.status_repository.get().await.unwrap();
    assert!(status.system_active);
    assert!(status.auto_deactivate_at.is_none());
}

#[actix_web::test]
async fn test_auto_deactivate_then_cancel_over_http() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token().await;

    let req = test::TestRequest::post()
        .uri("/api/system/auto-deactivate")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "minutes": 10 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/system-status").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let remaining = body["seconds_remaining"].as_i64().unwrap();
    assert!(remaining > 0 && remaining <= 600);

    let req = test::TestRequest::post()
        .uri("/api/system/cancel-timer")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/system-status").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["system_active"], true);
    assert!(body["auto_deactivate_at"].is_null());
}

#[actix_web::test]
async fn test_health_check_reports_database() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["database"], true);
}

#[actix_web::test]
async fn test_event_config_roundtrip() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token().await;

    let req = test::TestRequest::get().uri("/api/event-config").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["config"]["event_dates"].as_array().unwrap().len(), 2);

    let mut config = test_event_config();
    config.event_title = "IRP Review Week".to_string();

    let req = test::TestRequest::post()
        .uri("/api/admin/event-config")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(&config)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/event-config").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["config"]["event_title"], "IRP Review Week");
}

#[actix_web::test]
async fn test_event_config_rejects_orphan_slot_dates() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let token = test_app.admin_token().await;

    let mut config = test_event_config();
    // Templates for a date the event does not include
    let orphan: chrono::NaiveDate = "2099-03-01".parse().unwrap();
    config
        .date_slots
        .insert(orphan, config.time_slots.clone());

    let req = test::TestRequest::post()
        .uri("/api/admin/event-config")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(&config)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
