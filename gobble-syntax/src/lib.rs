//! Go syntax front end for the gobble builder generator.
//!
//! This crate turns Go source text into a small typed syntax model that the
//! code generator can analyse without depending on tree-sitter.
//!
//! # Module Organization
//!
//! - [`ast`] - The syntax model (declarations, statements, type expressions)
//! - [`parse`] - tree-sitter-go parsing and lowering into the model
//! - [`visit`] - Pre-order traversal with early exit
//! - [`tag`] - Struct tag (`key:"value"`) lookup

pub mod ast;
mod error;
mod literal;
pub mod parse;
pub mod tag;
pub mod visit;

pub use error::{Error, Result};
pub use literal::unquote;
pub use parse::{GoParser, parse_file, parse_source};
