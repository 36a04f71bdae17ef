use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for assetgen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{path}' is not under the asset root '{root}'")]
    #[diagnostic(
        code(assetgen::path_outside_root),
        help("every input must live under the asset root; pass --root to change it")
    )]
    PathOutsideRoot { path: PathBuf, root: PathBuf },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(assetgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(assetgen::output))]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write generated output")]
    #[diagnostic(code(assetgen::write))]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    #[diagnostic(code(assetgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(assetgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create an error for a failed output file operation
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Output {
            path: path.into(),
            source,
        })
    }

    /// Create an error for a failed write to the output stream
    pub fn write(source: std::io::Error) -> Box<Self> {
        Box::new(Error::Write { source })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span
    pub fn validation(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}
