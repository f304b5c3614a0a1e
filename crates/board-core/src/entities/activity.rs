use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ActivityPriority, ActivityStatus};

/// A single card on the board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ActivityStatus,
    pub priority: ActivityPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// Case-insensitive substring match against title or description.
    ///
    /// `needle_lower` must already be lowercased.
    #[must_use]
    pub fn mentions(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}
