//! Core operations.
//!
//! This module contains the business logic for gobble commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod inspect;
mod sources;

pub use generate::{GenerateOptions, generate};
pub use inspect::inspect;
pub use sources::SourceCache;
