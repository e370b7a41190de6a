//! Error types for fastache-renderer.

use std::path::PathBuf;

use thiserror::Error;

use crate::diagnostics::Diagnostic;

/// Rejections from [`crate::Identifier::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("empty tag")]
    Empty,

    #[error("invalid identifier '{text}': empty path segment")]
    EmptySegment { text: String },

    #[error("invalid identifier '{text}': unexpected character {found:?}")]
    InvalidChar { text: String, found: char },
}

/// Template compilation failures.
#[derive(Debug, Error)]
pub enum CompileError {
    /// One or more syntax errors; each is also available as a [`Diagnostic`].
    #[error("{} errors occurred while parsing {name}", .errors.len())]
    Syntax {
        name: String,
        errors: Vec<Diagnostic>,
    },

    /// The template source could not be read.
    #[error("error reading template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fatal render failures. Unresolved variables are not errors; they are
/// reported as diagnostics and rendering continues.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The sink returned an I/O error.
    #[error("error writing output: {0}")]
    Io(#[from] std::io::Error),

    /// The sink accepted fewer bytes than requested.
    #[error("short write: {written} of {expected} bytes accepted")]
    ShortWrite { expected: usize, written: usize },

    /// I/O failure while producing a named destination file.
    #[error("error writing {path}: {source}")]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendered bytes were not valid UTF-8.
    #[error("rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors loading [`crate::RenderOptions`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load; includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub(crate) fn destination_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Destination {
        path: path.into(),
        source,
    }
}
