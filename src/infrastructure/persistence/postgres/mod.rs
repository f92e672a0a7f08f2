//! PostgreSQL repository implementations

pub mod hue_record_repository;
pub mod session_repository;
pub mod user_repository;

pub use hue_record_repository::PostgresHueRecordRepository;
pub use session_repository::PostgresSessionRepository;
pub use user_repository::PostgresUserRepository;
