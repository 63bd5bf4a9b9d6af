//! Builder generation for Go structs.
//!
//! Given a parsed Go file and the name of a struct declared in it, this crate
//! finds the struct, collects its builder-visible fields into a
//! [`GenerationUnit`](gobble_ir::GenerationUnit) and renders a fluent builder
//! for it.
//!
//! # Module Organization
//!
//! - [`locate`] - Finding the target struct declaration
//! - [`signature`] - Rendering field types back to Go source
//! - [`options`] - `builder:"..."` struct tag options
//! - [`extract`] - Field filtering and descriptor construction
//! - [`naming`] - Unexported identifier derivation
//! - [`render`] - Go builder rendering
//! - [`generate`] - End-to-end generation
//! - [`builder`] - Indentation-aware code building

pub mod builder;
mod error;
pub mod extract;
pub mod generate;
pub mod locate;
pub mod naming;
pub mod options;
pub mod render;
pub mod signature;

pub use error::{Error, Result};
pub use generate::{build_unit, generate, generate_with};
pub use render::{GoBuilderRenderer, Render};
