//! # board-store
//!
//! In-memory state for the task board.
//!
//! `ActivityStore` is the sole owner of the activity collection and the
//! filter criteria. Every mutating method recomputes the filtered view
//! before it returns, so readers never see a view that lags the
//! collection. Nothing is persisted: a store lives as long as the value
//! that owns it.
//!
//! `BoardController` sits on top of the store and turns resolved drag
//! intents and form submissions into store calls. `BoardCommand` is the
//! serializable form of those intents, used to replay scripted sessions.

pub mod commands;
pub mod controller;
pub mod error;
pub mod filter;
mod ops;
pub mod seed;
pub mod store;
pub mod updates;

mod test_support;

pub use commands::{BoardCommand, CommandOutcome};
pub use controller::{BoardController, DropTarget};
pub use error::StoreError;
pub use store::ActivityStore;
