pub mod filters;
pub mod parse;
