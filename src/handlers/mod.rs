pub mod admin;
pub mod auth;
pub mod booking;
pub mod config;
pub mod system;
pub mod users;

// Re-export all handler functions for easy importing
pub use admin::*;
pub use auth::*;
pub use booking::*;
pub use config::*;
pub use system::*;
pub use users::*;
