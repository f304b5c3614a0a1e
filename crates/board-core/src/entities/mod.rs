//! Entity structs for Taskboard domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation.

mod activity;
mod draft;

pub use activity::Activity;
pub use draft::{NewActivity, validate_title};
