// Shared type definitions
// Each submodule defines types used across the crate.

pub mod errors;
pub mod page;
pub mod preferences;
pub mod state;
