//! Onboarding conversation: age, then gender, then goal.
//!
//! `state` holds the pure state machine; `session` keeps each user's
//! in-progress state between messages.

pub mod session;
pub mod state;

pub use session::SessionStore;
pub use state::{Effect, OnboardingState, Prompt};
