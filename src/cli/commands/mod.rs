//! CLI command implementations.

pub mod analyze;
pub mod indicators;
pub mod validate;
