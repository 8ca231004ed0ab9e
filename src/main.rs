use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use irp_booking_backend::auth::JwtManager;
use irp_booking_backend::config::AppConfig;
use irp_booking_backend::database::initialize_database;
use irp_booking_backend::event_config::EventConfigStore;
use irp_booking_backend::handlers;
use irp_booking_backend::openapi_config::{configure_openapi, ApiDoc};
use irp_booking_backend::repositories::{
    SqliteAdminRepository, SqliteBookingRepository, SqliteStudentRepository,
    SqliteSystemStatusRepository,
};
use irp_booking_backend::services::{
    AdminService, AvailabilityService, BookingService, ChangeHub, DeactivationTimer,
    RefreshCoordinator, StatusService, StudentService,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    let pool = initialize_database(&config.database_url).await?;

    // Initialize repositories
    let booking_repository = Arc::new(SqliteBookingRepository::new(pool.clone()));
    let student_repository = Arc::new(SqliteStudentRepository::new(pool.clone()));
    let status_repository = Arc::new(SqliteSystemStatusRepository::new(pool.clone()));
    let admin_repository = Arc::new(SqliteAdminRepository::new(pool.clone()));

    // Shared infrastructure
    let hub = Arc::new(ChangeHub::new());
    let config_store = Arc::new(EventConfigStore::new(&config.event_config_path));

    // Initialize services with dependency injection
    let admin_service = Arc::new(AdminService::new(admin_repository));
    admin_service
        .ensure_seed_account(&config.admin_username, &config.admin_default_password)
        .await?;

    let availability = Arc::new(AvailabilityService::new(booking_repository.clone()));
    let status_service = Arc::new(StatusService::new(status_repository.clone(), hub.clone()));
    let coordinator = Arc::new(RefreshCoordinator::new(
        availability,
        status_service.clone(),
        hub.clone(),
        config_store.clone(),
    ));
    let booking_service = Arc::new(BookingService::new(
        booking_repository,
        student_repository.clone(),
        config_store.clone(),
        status_service.clone(),
        coordinator.clone(),
        hub.clone(),
    ));
    let student_service = Arc::new(StudentService::new(student_repository));

    // Arm the deactivation timer against whatever end time survived restart,
    // then start the countdown and refresh loops.
    let timer = Arc::new(DeactivationTimer::new(
        status_repository,
        status_service.clone(),
        hub.clone(),
    ));
    timer.resume_from_store().await?;
    timer.start().await;
    coordinator.start().await;

    let jwt_manager = web::Data::new(JwtManager::new(&config.jwt_secret));

    tracing::info!("IRP Booking Server listening on http://{}", config.bind_address);

    // Configure OpenAPI spec with Bearer auth (do this once, outside the closure)
    let openapi_spec = configure_openapi(ApiDoc::openapi());

    let bind_address = config.bind_address;
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(jwt_manager.clone())
            .app_data(web::Data::from(admin_service.clone()))
            .app_data(web::Data::from(status_service.clone()))
            .app_data(web::Data::from(coordinator.clone()))
            .app_data(web::Data::from(booking_service.clone()))
            .app_data(web::Data::from(student_service.clone()))
            .app_data(web::Data::from(timer.clone()))
            .app_data(web::Data::from(config_store.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials(),
            )
            .wrap(Logger::default())
            // Swagger UI for API documentation
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            // API endpoints only - the frontend is served separately
            .route("/api/register", web::post().to(handlers::register_api))
            .route("/api/signin", web::post().to(handlers::sign_in_api))
            .route("/api/slots", web::get().to(handlers::get_slots))
            .route("/api/book", web::post().to(handlers::book_slot_api))
            .route("/api/my-booking/{user_id}", web::get().to(handlers::get_my_booking))
            .route("/api/bookings/{id}/ticket", web::get().to(handlers::get_ticket_data))
            .route("/api/event-config", web::get().to(handlers::get_event_config))
            .route("/api/system-status", web::get().to(handlers::get_system_status))
            .route("/api/health", web::get().to(handlers::health_check))
            .route("/api/admin/login", web::post().to(handlers::admin_login_api))
            .route("/api/admin/logout", web::post().to(handlers::admin_logout_api))
            .route("/api/admin/change-password", web::post().to(handlers::change_password_api))
            .route("/api/admin/bookings", web::get().to(handlers::get_admin_bookings))
            .route("/api/admin/bookings/delete/{id}", web::post().to(handlers::delete_booking))
            .route("/api/admin/slots", web::get().to(handlers::get_admin_slots))
            .route("/api/admin/event-config", web::post().to(handlers::update_event_config))
            .route("/api/system/toggle", web::post().to(handlers::toggle_system_api))
            .route("/api/system/auto-deactivate", web::post().to(handlers::set_auto_deactivate_api))
            .route("/api/system/cancel-timer", web::post().to(handlers::cancel_timer_api))
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}
