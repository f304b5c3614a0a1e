//! Status and priority enums, plus the `all`-or-one selection used by filters.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::de::{DeserializeOwned, IntoDeserializer, value::StringDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// ActivityStatus
// ---------------------------------------------------------------------------

/// Column an activity lives in.
///
/// ```text
/// todo ⇄ in_progress ⇄ completed ⇄ cancelled
/// ```
///
/// Every status may move to every other status. None of them is terminal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    #[default]
    Todo,
    #[serde(alias = "inProgress")]
    InProgress,
    Completed,
    Cancelled,
}

impl ActivityStatus {
    /// All statuses in board display order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Completed, Self::Cancelled];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActivityPriority
// ---------------------------------------------------------------------------

/// Priority of an activity. New drafts default to `medium`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl ActivityPriority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ActivityPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

const ALL: &str = "all";

/// Either every value (`"all"`) or exactly one value of `T`.
///
/// Serializes as the literal string `"all"` or as `T` itself, so
/// `Selection<ActivityStatus>` reads and writes `"all"`, `"todo"`,
/// `"in_progress"`, and so on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Self::Only(value)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::All => serializer.serialize_str(ALL),
            Self::Only(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == ALL {
            return Ok(Self::All);
        }
        let inner: StringDeserializer<D::Error> = raw.into_deserializer();
        T::deserialize(inner).map(Self::Only)
    }
}
