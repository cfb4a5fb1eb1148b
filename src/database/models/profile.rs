//! User profile model collected by onboarding.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// Gender answer accepted during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse a user answer (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// Fitness goal. Drives which workout plan a user gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    GainMuscle,
    StayFit,
}

impl Goal {
    /// Parse a user answer (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "lose_weight" => Some(Self::LoseWeight),
            "gain_muscle" => Some(Self::GainMuscle),
            "stay_fit" => Some(Self::StayFit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::GainMuscle => "gain_muscle",
            Self::StayFit => "stay_fit",
        }
    }
}

/// Answers of a completed onboarding, not yet persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileDraft {
    pub age: u32,
    pub gender: Gender,
    pub goal: Goal,
}

/// Persisted user profile (`users` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Telegram user ID, string-encoded.
    #[serde(rename = "_id")]
    pub user_id: String,
    pub age: u32,
    pub gender: Gender,
    /// Missing on documents written by hand or by older versions.
    #[serde(default)]
    pub goal: Option<Goal>,
    /// Server-assigned write time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime>,
}

/// Document key for a Telegram user.
pub fn user_key(user_id: u64) -> String {
    user_id.to_string()
}
