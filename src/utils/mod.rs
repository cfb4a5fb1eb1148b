//! Utility types shared by handlers.

pub mod reply;

pub use reply::{ChatEvent, Reply};
