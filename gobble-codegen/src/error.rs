use miette::Diagnostic;
use thiserror::Error;

/// Result type for builder generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    #[error("could not find definition of struct {target}")]
    #[diagnostic(
        code(gobble::not_found),
        help("'{target}' must be declared as a struct type (`type {target} struct {{ ... }}`) in this file")
    )]
    NotFound { target: String },

    #[error("invalid field option '{token}' on field {field}")]
    #[diagnostic(
        code(gobble::invalid_option),
        help("the only supported option is 'ignore', e.g. `builder:\"ignore\"`")
    )]
    InvalidAnnotation { field: String, token: String },

    #[error("failed to determine type of field {field}: unsupported {kind}")]
    #[diagnostic(
        code(gobble::unsupported_type),
        help("declare a named type for it and use that name in the struct")
    )]
    UnsupportedType { field: String, kind: String },

    #[error("failed to determine type of field {field}: qualifier of a selector type must be a plain package name")]
    #[diagnostic(code(gobble::malformed_qualified_type))]
    MalformedQualifiedType { field: String },

    #[error("failed to extract fields of struct {target}")]
    #[diagnostic(code(gobble::extract))]
    Extract {
        target: String,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to render builder for struct {target}: {message}")]
    #[diagnostic(code(gobble::render))]
    Render { target: String, message: String },
}
