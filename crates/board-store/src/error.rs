//! Store error types.
//!
//! Unknown ids are not errors: every id-addressed operation treats them as a
//! silent no-op.

use board_core::enums::ActivityStatus;
use board_core::errors::CoreError;
use thiserror::Error;

/// Errors from store and controller operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A reorder index does not address an activity in the column.
    #[error("Index {index} out of range for column '{status}' ({len} activities)")]
    IndexOutOfRange {
        status: ActivityStatus,
        index: usize,
        len: usize,
    },

    /// A form-level check failed before reaching the store.
    #[error(transparent)]
    Core(#[from] CoreError),
}
