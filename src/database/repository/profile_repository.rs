//! Profile repository.
//!
//! Profiles are read fresh on every command, so there is no cache tier here.

use anyhow::Result;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use mongodb::options::UpdateOptions;
use tracing::debug;

use crate::database::Database;
use crate::database::models::{ProfileDraft, UserProfile, user_key};

/// Repository for the `users` collection.
#[derive(Clone)]
pub struct ProfileRepository {
    collection: Collection<UserProfile>,
}

impl ProfileRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    /// Overwrite the whole profile document, stamping it with server time.
    pub async fn write(&self, user_id: u64, draft: &ProfileDraft) -> Result<()> {
        let key = user_key(user_id);
        let filter = doc! { "_id": key.as_str() };
        let options = UpdateOptions::builder().upsert(true).build();

        // $replaceWith drops any field not listed, so re-onboarding never merges
        let pipeline: Vec<Document> = vec![doc! {
            "$replaceWith": {
                "_id": key.as_str(),
                "age": i64::from(draft.age),
                "gender": draft.gender.as_str(),
                "goal": draft.goal.as_str(),
                "timestamp": "$$NOW",
            }
        }];

        self.collection
            .update_one(filter, pipeline)
            .with_options(options)
            .await?;

        debug!("Wrote profile for user {}", user_id);
        Ok(())
    }

    /// Point lookup by user ID.
    pub async fn get(&self, user_id: u64) -> Result<Option<UserProfile>> {
        let filter = doc! { "_id": user_key(user_id) };
        let result = self.collection.find_one(filter).await?;
        debug!("DB get profile for {}: {:?}", user_id, result.is_some());
        Ok(result)
    }
}
