//! Profile store - the persistence seam used by every handler.

use async_trait::async_trait;

use super::models::{ProfileDraft, UserProfile};
use super::repository::{ProfileRepository, WorkoutLogRepository};
use super::Database;

/// Access to user profiles and their workout logs.
///
/// Handlers receive this as `Arc<dyn ProfileStore>`. Writes are
/// last-writer-wins; nothing here is transactional.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Overwrite the user's profile with a server timestamp.
    async fn write_profile(&self, user_id: u64, draft: &ProfileDraft) -> anyhow::Result<()>;

    /// Look up a profile by user ID.
    async fn read_profile(&self, user_id: u64) -> anyhow::Result<Option<UserProfile>>;

    /// Append one workout log entry. Callers check the profile exists first.
    async fn append_workout_log(&self, user_id: u64, workout: &str) -> anyhow::Result<()>;

    /// Number of workout log entries the user has.
    async fn count_workout_logs(&self, user_id: u64) -> anyhow::Result<u64>;
}

/// MongoDB-backed store.
#[derive(Clone)]
pub struct MongoStore {
    profiles: ProfileRepository,
    logs: WorkoutLogRepository,
}

impl MongoStore {
    /// Build the store and make sure its indexes exist.
    pub async fn new(db: &Database) -> anyhow::Result<Self> {
        let store = Self {
            profiles: ProfileRepository::new(db),
            logs: WorkoutLogRepository::new(db),
        };
        store.logs.ensure_indexes().await?;
        Ok(store)
    }
}

#[async_trait]
impl ProfileStore for MongoStore {
    async fn write_profile(&self, user_id: u64, draft: &ProfileDraft) -> anyhow::Result<()> {
        self.profiles.write(user_id, draft).await
    }

    async fn read_profile(&self, user_id: u64) -> anyhow::Result<Option<UserProfile>> {
        self.profiles.get(user_id).await
    }

    async fn append_workout_log(&self, user_id: u64, workout: &str) -> anyhow::Result<()> {
        self.logs.append(user_id, workout).await
    }

    async fn count_workout_logs(&self, user_id: u64) -> anyhow::Result<u64> {
        self.logs.count(user_id).await
    }
}
