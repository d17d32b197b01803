//! Shared building blocks for the admin API crates: logging setup,
//! startup environment checks and wire types used across crates.

pub mod types;
pub mod utils;
pub mod env;
