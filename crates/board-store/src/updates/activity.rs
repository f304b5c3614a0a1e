//! Activity update builder.

use board_core::entities::{Activity, NewActivity};
use board_core::enums::{ActivityPriority, ActivityStatus};
use serde::{Deserialize, Serialize};

/// Fields an update may change.
///
/// `id`, `created_at` and `updated_at` are owned by the store and have no
/// field here. Unknown keys in a JSON payload (including those three) are
/// ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<ActivityPriority>,
}

impl ActivityUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }

    /// Merge the provided fields into `activity`. Timestamps are the caller's job.
    pub(crate) fn apply(self, activity: &mut Activity) {
        if let Some(title) = self.title {
            activity.title = title;
        }
        if let Some(description) = self.description {
            activity.description = description;
        }
        if let Some(status) = self.status {
            activity.status = status;
        }
        if let Some(priority) = self.priority {
            activity.priority = priority;
        }
    }
}

/// A submitted edit form replaces every editable field.
impl From<NewActivity> for ActivityUpdate {
    fn from(draft: NewActivity) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            status: Some(draft.status),
            priority: Some(draft.priority),
        }
    }
}

#[derive(Debug, Default)]
pub struct ActivityUpdateBuilder(ActivityUpdate);

impl ActivityUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ActivityUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ActivityStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: ActivityPriority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn build(self) -> ActivityUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_only_requested_fields() {
        let update = ActivityUpdateBuilder::new()
            .priority(ActivityPriority::High)
            .build();
        assert_eq!(update.priority, Some(ActivityPriority::High));
        assert!(update.title.is_none());
        assert!(!update.is_empty());
        assert!(ActivityUpdateBuilder::new().build().is_empty());
    }

    #[test]
    fn serializes_changed_fields_only() {
        let update = ActivityUpdateBuilder::new().title("Renamed").build();
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"title":"Renamed"}"#);
    }

    #[test]
    fn store_owned_keys_are_dropped_on_parse() {
        let update: ActivityUpdate = serde_json::from_str(
            r#"{"id":"act-ffffffff","created_at":"2020-01-01T00:00:00Z","status":"completed"}"#,
        )
        .unwrap();
        assert_eq!(
            update,
            ActivityUpdateBuilder::new().status(ActivityStatus::Completed).build()
        );
    }
}
