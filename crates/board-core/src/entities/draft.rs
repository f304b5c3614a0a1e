use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ActivityPriority, ActivityStatus};
use crate::errors::CoreError;

/// Creation payload for an activity.
///
/// The default draft mirrors an empty form: no text, `todo`, `medium`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewActivity {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ActivityStatus,
    #[serde(default)]
    pub priority: ActivityPriority,
}

impl NewActivity {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ActivityStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: ActivityPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Form-level check: the title must contain something besides whitespace.
    ///
    /// The store accepts any title; callers that stand in for the form call this first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the trimmed title is empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_title(&self.title)
    }
}

/// Reject titles that are empty after trimming.
///
/// # Errors
///
/// Returns `CoreError::Validation` for a blank title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    Ok(())
}
