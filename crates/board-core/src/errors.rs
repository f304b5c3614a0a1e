//! Cross-cutting error types for Taskboard.
//!
//! Store-specific errors (`StoreError`) live in `board-store`, configuration
//! errors in `board-config`. The CLI converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Taskboard crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (e.g. a blank title on a form submission).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
