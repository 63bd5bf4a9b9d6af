use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for gobble-syntax operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(gobble::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load the Go grammar: {message}")]
    #[diagnostic(code(gobble::grammar))]
    Language { message: String },

    #[error("failed to parse file '{filename}'")]
    #[diagnostic(code(gobble::parse_aborted))]
    Aborted { filename: String },

    #[error("failed to parse file '{filename}': {message}")]
    #[diagnostic(code(gobble::syntax_error))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        filename: String,
        message: String,
    },
}

impl Error {
    /// Create a syntax error pointing at `span` in `src`
    pub fn syntax(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: impl Into<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Syntax {
            src: NamedSource::new(filename, src.to_string()),
            span: span.into(),
            filename: filename.to_string(),
            message: message.into(),
        })
    }
}
