//! Cache module - typed in-memory caches backed by Moka.
//!
//! Used for short-lived, per-user state that must never outlive its
//! idle window (onboarding sessions).

mod config;
mod typed;

pub use config::CacheConfig;
pub use typed::TypedCache;
