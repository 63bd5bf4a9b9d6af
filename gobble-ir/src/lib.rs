//! Intermediate representation types for the gobble Go builder generator.
//!
//! The IR is the only thing the builder renderer sees: a module name, the
//! target struct name and the ordered list of fields that survived
//! eligibility filtering.
//!
//! # Architecture
//!
//! ```text
//! Go source → gobble-syntax (parsing) → gobble-codegen (analysis) → gobble-ir → renderer
//! ```
//!
//! The IR types are designed to be:
//! - Immutable once built (no mutators, fields are read through accessors)
//! - Self-contained (no dependency on the syntax tree they were derived from)
//! - Serializable, so a unit can be inspected as JSON

mod unit;

pub use unit::{FieldDescriptor, GenerationUnit};
