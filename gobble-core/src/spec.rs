//! `FILE:TARGET` specifications passed on the command line.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use miette::Diagnostic;
use thiserror::Error;

use crate::camel_to_snake_case;

/// Suffix appended to the snake-cased target name to form the output file name.
pub const BUILDER_FILE_SUFFIX: &str = "_builder.go";

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum SpecError {
    #[error("'{input}' is not in the format FILE:TARGET_STRUCT")]
    #[diagnostic(
        code(gobble::invalid_spec),
        help("pass the Go source file and the struct name separated by a colon, e.g. 'user.go:User'")
    )]
    Format { input: String },
}

/// A request to generate a builder for one struct in one source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetSpec {
    /// Path to the Go source file.
    pub path: PathBuf,
    /// Name of the struct type to generate a builder for.
    pub target: String,
}

impl TargetSpec {
    pub fn new(path: impl Into<PathBuf>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
        }
    }

    /// Path of the generated builder: next to the input file, named after the target.
    pub fn output_path(&self) -> PathBuf {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        dir.join(format!(
            "{}{}",
            camel_to_snake_case(&self.target),
            BUILDER_FILE_SUFFIX
        ))
    }
}

impl FromStr for TargetSpec {
    type Err = SpecError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.split_once(':') {
            Some((path, target)) if !path.is_empty() && !target.is_empty() => {
                Ok(Self::new(path, target))
            }
            _ => Err(SpecError::Format {
                input: input.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.target)
    }
}
