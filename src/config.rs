use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub jwt_secret: String,
    pub admin_username: String,
    pub admin_default_password: String,
    pub event_config_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .unwrap_or(5000);

        let bind_address = format!("{}:{}", host, port)
            .parse()
            .expect("Invalid bind address");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:irp-booking.db".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            use rand::Rng;
            let mut rng = rand::thread_rng();
            let bytes: [u8; 32] = rng.gen();
            use base64::Engine;
            base64::engine::general_purpose::STANDARD.encode(bytes)
        });

        let admin_username = std::env::var("ADMIN_USERNAME")
            .unwrap_or_else(|_| "admin".to_string());

        let admin_default_password = std::env::var("ADMIN_PASSWORD")
            .unwrap_or_else(|_| "admin".to_string());

        let event_config_path = std::env::var("EVENT_CONFIG_PATH")
            .unwrap_or_else(|_| "event-config.json".to_string());

        Self {
            database_url,
            bind_address,
            jwt_secret,
            admin_username,
            admin_default_password,
            event_config_path,
        }
    }
}
