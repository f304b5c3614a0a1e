//! Filter update builder.

use board_core::enums::{ActivityPriority, ActivityStatus, Selection};
use board_core::filters::FilterCriteria;
use serde::{Deserialize, Serialize};

/// Criteria to override. Each field is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Selection<ActivityStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Selection<ActivityPriority>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FilterUpdate {
    /// An update that resets every criterion to "no filtering".
    #[must_use]
    pub fn clear() -> Self {
        Self {
            status: Some(Selection::All),
            priority: Some(Selection::All),
            search: Some(String::new()),
        }
    }

    pub(crate) fn apply(self, criteria: &mut FilterCriteria) {
        if let Some(status) = self.status {
            criteria.status = status;
        }
        if let Some(priority) = self.priority {
            criteria.priority = priority;
        }
        if let Some(search) = self.search {
            criteria.search = search;
        }
    }
}

#[derive(Debug, Default)]
pub struct FilterUpdateBuilder(FilterUpdate);

impl FilterUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(FilterUpdate::default())
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<Selection<ActivityStatus>>) -> Self {
        self.0.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: impl Into<Selection<ActivityPriority>>) -> Self {
        self.0.priority = Some(priority.into());
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.0.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn build(self) -> FilterUpdate {
        self.0
    }
}
