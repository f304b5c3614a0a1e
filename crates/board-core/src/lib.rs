//! # board-core
//!
//! Core types, ID generation, clock and error types for Taskboard.
//!
//! This crate provides the foundational types shared across all Taskboard crates:
//! - The `Activity` entity and its creation draft
//! - Status and priority enums, and the `all`-or-one filter selection
//! - Filter criteria
//! - ID prefix constants and generation helpers
//! - The `Clock` abstraction
//! - The fixed board column layout and snapshot read models
//! - Cross-cutting error types

pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filters;
pub mod ids;
pub mod layout;
pub mod responses;
