//! Per-user onboarding sessions.
//!
//! A session stays open until the user finishes or cancels. An idle
//! expiry can be configured; without one, an abandoned questionnaire
//! resumes whenever the user answers again.

use std::time::Duration;

use crate::cache::{CacheConfig, TypedCache};

use super::state::OnboardingState;

/// In-progress onboarding state keyed by Telegram user ID.
#[derive(Clone, Debug)]
pub struct SessionStore {
    sessions: TypedCache<u64, OnboardingState>,
}

impl SessionStore {
    /// `idle` of `None` keeps sessions until they end.
    pub fn new(idle: Option<Duration>) -> Self {
        Self {
            sessions: TypedCache::new("onboarding_sessions", CacheConfig::session(idle)),
        }
    }

    /// Current state, if the user is mid-onboarding.
    pub fn get(&self, user_id: u64) -> Option<OnboardingState> {
        self.sessions.get(&user_id)
    }

    /// Store the next state; terminal states end the session.
    pub fn set(&self, user_id: u64, state: OnboardingState) {
        if state.is_terminal() {
            self.sessions.remove(&user_id);
        } else {
            self.sessions.insert(user_id, state);
        }
    }

    /// Drop the session, returning what it held.
    pub fn end(&self, user_id: u64) -> Option<OnboardingState> {
        self.sessions.remove(&user_id)
    }
}
