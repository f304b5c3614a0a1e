//! Read models handed to the presentation layer.

use serde::Serialize;

use crate::entities::Activity;
use crate::filters::FilterCriteria;
use crate::layout::BoardColumn;

/// One column of the filtered board.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ColumnView {
    #[serde(flatten)]
    pub column: BoardColumn,
    pub activities: Vec<Activity>,
}

/// The filtered view grouped by column.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub filters: FilterCriteria,
    pub columns: Vec<ColumnView>,
    /// Activities in the store, regardless of filters.
    pub total: usize,
    /// Activities that passed the filters.
    pub visible: usize,
}
