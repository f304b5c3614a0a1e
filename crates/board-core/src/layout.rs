//! Fixed board layout: the four columns in display order.

use serde::Serialize;

use crate::enums::ActivityStatus;

/// Static description of one board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    pub status: ActivityStatus,
    pub title: &'static str,
    pub accent: &'static str,
}

pub const COLUMNS: [BoardColumn; 4] = [
    BoardColumn {
        status: ActivityStatus::Todo,
        title: "To do",
        accent: "red",
    },
    BoardColumn {
        status: ActivityStatus::InProgress,
        title: "In progress",
        accent: "blue",
    },
    BoardColumn {
        status: ActivityStatus::Completed,
        title: "Completed",
        accent: "green",
    },
    BoardColumn {
        status: ActivityStatus::Cancelled,
        title: "Cancelled",
        accent: "gray",
    },
];

/// Column definition for a status.
#[must_use]
pub const fn column_for(status: ActivityStatus) -> &'static BoardColumn {
    match status {
        ActivityStatus::Todo => &COLUMNS[0],
        ActivityStatus::InProgress => &COLUMNS[1],
        ActivityStatus::Completed => &COLUMNS[2],
        ActivityStatus::Cancelled => &COLUMNS[3],
    }
}
