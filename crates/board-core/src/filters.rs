//! Filter criteria applied to the activity collection.

use serde::{Deserialize, Serialize};

use crate::enums::{ActivityPriority, ActivityStatus, Selection};

/// Current status/priority/search narrowing.
///
/// The default is "no filtering": `all`, `all`, and an empty search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub status: Selection<ActivityStatus>,
    #[serde(default)]
    pub priority: Selection<ActivityPriority>,
    #[serde(default)]
    pub search: String,
}

impl FilterCriteria {
    /// Whether any criterion narrows the view.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.status.is_all() || !self.priority.is_all() || !self.search.is_empty()
    }
}
