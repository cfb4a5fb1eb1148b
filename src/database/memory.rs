//! In-memory `ProfileStore` for handler tests.

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::DateTime;

use super::models::{ProfileDraft, UserProfile, WorkoutLogEntry, user_key};
use super::store::ProfileStore;

#[derive(Default)]
pub struct MemoryStore {
    profiles: DashMap<u64, UserProfile>,
    logs: DashMap<u64, Vec<WorkoutLogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a profile document as-is.
    pub fn put_profile(&self, user_id: u64, profile: UserProfile) {
        self.profiles.insert(user_id, profile);
    }

    /// Snapshot of a user's log entries in insertion order.
    pub fn logs(&self, user_id: u64) -> Vec<WorkoutLogEntry> {
        self.logs
            .get(&user_id)
            .map(|entries| entries.value().clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn write_profile(&self, user_id: u64, draft: &ProfileDraft) -> anyhow::Result<()> {
        let profile = UserProfile {
            user_id: user_key(user_id),
            age: draft.age,
            gender: draft.gender,
            goal: Some(draft.goal),
            timestamp: Some(DateTime::now()),
        };
        self.profiles.insert(user_id, profile);
        Ok(())
    }

    async fn read_profile(&self, user_id: u64) -> anyhow::Result<Option<UserProfile>> {
        Ok(self.profiles.get(&user_id).map(|p| p.value().clone()))
    }

    async fn append_workout_log(&self, user_id: u64, workout: &str) -> anyhow::Result<()> {
        let entry = WorkoutLogEntry {
            id: None,
            user_id: user_key(user_id),
            workout: workout.to_string(),
            timestamp: Some(DateTime::now()),
        };
        self.logs.entry(user_id).or_default().push(entry);
        Ok(())
    }

    async fn count_workout_logs(&self, user_id: u64) -> anyhow::Result<u64> {
        Ok(self.logs.get(&user_id).map(|entries| entries.len() as u64).unwrap_or(0))
    }
}
