//! Partial-update types for store mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are merged into the target; `None` leaves the current value alone.

pub mod activity;
pub mod filter;
