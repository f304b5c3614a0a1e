//! ID prefixes and generation helpers.
//!
//! IDs have the shape `{prefix}-{8 hex chars}`. Uniqueness against the live
//! collection is the caller's job; these helpers only produce candidates.

use crate::errors::CoreError;

pub const PREFIX_ACTIVITY: &str = "act";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_ACTIVITY];

/// Build a candidate ID from 4 bytes of OS randomness.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn random_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::Other(anyhow::anyhow!(e)))?;
    Ok(format!("{prefix}-{:08x}", u32::from_be_bytes(bytes)))
}

/// Build a deterministic candidate ID from a sequence number.
#[must_use]
pub fn sequence_id(prefix: &str, sequence: u32) -> String {
    format!("{prefix}-{sequence:08x}")
}
