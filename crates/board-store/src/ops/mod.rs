//! Store mutations, grouped by concern.
//!
//! Each module adds methods to `ActivityStore` via `impl ActivityStore` blocks.
//! Every method that changes state ends with `refresh()`.

mod activity;
mod filters;
mod reorder;
