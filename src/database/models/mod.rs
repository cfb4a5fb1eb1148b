//! Database models.

pub mod profile;
pub mod workout_log;

pub use profile::{Gender, Goal, ProfileDraft, UserProfile, user_key};
pub use workout_log::WorkoutLogEntry;
