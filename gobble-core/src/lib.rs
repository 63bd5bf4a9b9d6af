//! Core utilities and types for the gobble Go builder generator.
//!
//! This crate provides the pieces shared by the command-line layer that are
//! independent of Go syntax: target specifications, output naming and
//! generated-file writing.

mod file;
mod spec;
mod utils;

// File operations
pub use file::{File, WriteResult};
// Target specifications
pub use spec::{BUILDER_FILE_SUFFIX, SpecError, TargetSpec};
// String utilities
pub use utils::camel_to_snake_case;
