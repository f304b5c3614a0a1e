//! Board behavior configuration.

use serde::{Deserialize, Serialize};

/// How `reorder` writes a column back into the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingMode {
    /// The reordered column takes back the slots it already occupied.
    /// Other columns are untouched.
    #[default]
    Manual,
    /// Legacy: after the splice the whole collection is stably sorted by
    /// `created_at`, which can collapse manual order back to creation order.
    CreatedAt,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BoardSettings {
    #[serde(default)]
    pub ordering: OrderingMode,
}
