//! Per-field builder options read from the `builder` struct tag.

use gobble_syntax::tag;
use thiserror::Error;

/// Struct tag key holding the builder options, e.g. `builder:"ignore"`.
pub const TAG_KEY: &str = "builder";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid field option '{token}'")]
pub struct OptionError {
    pub token: String,
}

/// Options controlling how a single field is treated by the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Leave the field out of the builder.
    pub ignore: bool,
}

impl FieldOptions {
    /// Parse a comma separated option list.
    ///
    /// Blank entries are skipped; unknown options are rejected.
    pub fn parse(annotation: &str) -> Result<Self, OptionError> {
        let mut options = Self::default();
        for token in annotation.split(',').map(str::trim) {
            match token {
                "" => continue,
                "ignore" => options.ignore = true,
                other => {
                    return Err(OptionError {
                        token: other.to_string(),
                    });
                }
            }
        }
        Ok(options)
    }

    /// Parse the options stored under [`TAG_KEY`] in an unquoted struct tag.
    pub fn from_tag(tag: Option<&str>) -> Result<Self, OptionError> {
        match tag.and_then(|tag| tag::lookup(tag, TAG_KEY)) {
            Some(annotation) => Self::parse(&annotation),
            None => Ok(Self::default()),
        }
    }
}
