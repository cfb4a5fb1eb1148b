//! Workout log repository.
//!
//! Entries are append-only and keyed back to their profile by `user_id`.

use anyhow::Result;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::options::UpdateOptions;
use mongodb::{Collection, IndexModel};
use tracing::debug;

use crate::database::Database;
use crate::database::models::{WorkoutLogEntry, user_key};

/// Repository for the `workout_logs` collection.
#[derive(Clone)]
pub struct WorkoutLogRepository {
    collection: Collection<WorkoutLogEntry>,
}

impl WorkoutLogRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("workout_logs"),
        }
    }

    /// Create the `user_id` index used by counts.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder().keys(doc! { "user_id": 1 }).build();
        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Append a new entry with a server-assigned timestamp.
    pub async fn append(&self, user_id: u64, workout: &str) -> Result<()> {
        // Upsert on a fresh id inserts exactly one document and lets the
        // pipeline read $$NOW; $literal keeps user text from being parsed
        // as a field path.
        let filter = doc! { "_id": ObjectId::new() };
        let options = UpdateOptions::builder().upsert(true).build();
        let pipeline: Vec<Document> = vec![doc! {
            "$set": {
                "user_id": user_key(user_id),
                "workout": { "$literal": workout },
                "timestamp": "$$NOW",
            }
        }];

        self.collection
            .update_one(filter, pipeline)
            .with_options(options)
            .await?;

        debug!("Appended workout log for user {}", user_id);
        Ok(())
    }

    /// Count every entry belonging to a user.
    pub async fn count(&self, user_id: u64) -> Result<u64> {
        let filter = doc! { "user_id": user_key(user_id) };
        let count = self.collection.count_documents(filter).await?;
        debug!("User {} has {} workout logs", user_id, count);
        Ok(count)
    }
}
