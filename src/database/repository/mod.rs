//! Repository module - data access per collection.

mod profile_repository;
mod workout_log_repository;

pub use profile_repository::ProfileRepository;
pub use workout_log_repository::WorkoutLogRepository;
