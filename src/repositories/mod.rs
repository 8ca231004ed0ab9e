pub mod admin_repository;
pub mod booking_repository;
pub mod status_repository;
pub mod student_repository;

pub use admin_repository::*;
pub use booking_repository::*;
pub use status_repository::*;
pub use student_repository::*;
