use actix_web::{test, web, App};
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::collections::BTreeMap;
use std::sync::Arc;
use tempfile::TempDir;

use irp_booking_backend::{
    auth::JwtManager,
    event_config::EventConfigStore,
    handlers,
    models::{EventConfig, SlotTemplate},
    repositories::{
        SqliteAdminRepository, SqliteBookingRepository, SqliteStudentRepository,
        SqliteSystemStatusRepository,
    },
    services::{
        AdminService, AvailabilityService, BookingService, ChangeHub, DeactivationTimer,
        RefreshCoordinator, StatusService, StudentService,
    },
};

/// Event configuration used by the HTTP tests: two far-future dates with the
/// standard four templates and no enrollment windows, so every slot is open
/// regardless of when the suite runs.
pub fn test_event_config() -> EventConfig {
    let dates: Vec<NaiveDate> = vec![
        "2099-01-06".parse().unwrap(),
        "2099-01-07".parse().unwrap(),
    ];
    let templates = vec![
        SlotTemplate { id: "1".to_string(), time: "1:45 PM - 2:15 PM".to_string() },
        SlotTemplate { id: "2".to_string(), time: "2:15 PM - 2:45 PM".to_string() },
        SlotTemplate { id: "3".to_string(), time: "2:45 PM - 3:15 PM".to_string() },
        SlotTemplate { id: "4".to_string(), time: "3:15 PM - 3:45 PM".to_string() },
    ];

    EventConfig {
        event_dates: dates.clone(),
        time_slots: templates.clone(),
        date_slots: dates.iter().map(|date| (*date, templates.clone())).collect(),
        global_enrollment_window: None,
        enrollment_windows: BTreeMap::new(),
        ..EventConfig::default()
    }
}

pub struct TestApp {
    pub pool: SqlitePool,
    pub jwt_manager: JwtManager,
    pub hub: Arc<ChangeHub>,
    pub config_store: Arc<EventConfigStore>,
    pub booking_repository: Arc<SqliteBookingRepository>,
    pub status_repository: Arc<SqliteSystemStatusRepository>,
    pub status_service: Arc<StatusService>,
    pub coordinator: Arc<RefreshCoordinator>,
    pub booking_service: Arc<BookingService>,
    pub student_service: Arc<StudentService>,
    pub admin_service: Arc<AdminService>,
    pub timer: Arc<DeactivationTimer>,
    #[allow(dead_code)]
    pub temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_event_config()).await
    }

    pub async fn with_config(event_config: EventConfig) -> Self {
        // Create temporary database
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await
            .expect("Failed to create database pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Persist the event configuration the app under test will read
        let config_path = temp_dir.path().join("event-config.json");
        std::fs::write(
            &config_path,
            serde_json::to_string_pretty(&event_config).unwrap(),
        )
        .expect("Failed to write event config");

        let booking_repository = Arc::new(SqliteBookingRepository::new(pool.clone()));
        let student_repository = Arc::new(SqliteStudentRepository::new(pool.clone()));
        let status_repository = Arc::new(SqliteSystemStatusRepository::new(pool.clone()));
        let admin_repository = Arc::new(SqliteAdminRepository::new(pool.clone()));

        let hub = Arc::new(ChangeHub::new());
        let config_store = Arc::new(EventConfigStore::new(&config_path));

        let admin_service = Arc::new(AdminService::new(admin_repository));
        admin_service
            .ensure_seed_account("admin", "admin")
            .await
            .expect("Failed to seed admin account");

        let availability = Arc::new(AvailabilityService::new(booking_repository.clone()));
        let status_service = Arc::new(StatusService::new(status_repository.clone(), hub.clone()));
        let coordinator = Arc::new(RefreshCoordinator::new(
            availability,
            status_service.clone(),
            hub.clone(),
            config_store.clone(),
        ));
        let booking_service = Arc::new(BookingService::new(
            booking_repository.clone(),
            student_repository.clone(),
            config_store.clone(),
            status_service.clone(),
            coordinator.clone(),
            hub.clone(),
        ));
        let student_service = Arc::new(StudentService::new(student_repository));
        let timer = Arc::new(DeactivationTimer::new(
            status_repository.clone(),
            status_service.clone(),
            hub.clone(),
        ));

        let jwt_manager = JwtManager::new("test_secret_key");

        Self {
            pool,
            jwt_manager,
            hub,
            config_store,
            booking_repository,
            status_repository,
            status_service,
            coordinator,
            booking_service,
            student_service,
            admin_service,
            timer,
            temp_dir,
        }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.pool.clone()))
            .app_data(web::Data::new(self.jwt_manager.clone()))
            .app_data(web::Data::from(self.admin_service.clone()))
            .app_data(web::Data::from(self.status_service.clone()))
            .app_data(web::Data::from(self.coordinator.clone()))
            .app_data(web::Data::from(self.booking_service.clone()))
            .app_data(web::Data::from(self.student_service.clone()))
            .app_data(web::Data::from(self.timer.clone()))
            .app_data(web::Data::from(self.config_store.clone()))
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
    }

    pub async fn admin_token(&self) -> String {
        let app = test::init_service(self.create_app()).await;

        let login_req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(serde_json::json!({
                "username": "admin",
                "password": "admin"
            }))
            .to_request();

        let resp = test::call_service(&app, login_req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;

        body["token"].as_str().expect("login must return a token").to_string()
    }

    /// Register a student through the service layer and return their id.
    pub async fn register_student(&self, name: &str, roll_no: &str, email: &str) -> i64 {
        use irp_booking_backend::models::RegisterForm;

        let form = RegisterForm {
            name: name.to_string(),
            roll_no: roll_no.to_string(),
            department: "CSE".to_string(),
            email: email.to_string(),
            year: 3,
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };

        self.student_service
            .register(&form)
            .await
            .expect("Failed to register test student")
            .id
    }
}
