//! Error types for fastache-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading host data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying I/O failure while reading a data file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file did not exist.
    #[error("data file not found at {path}")]
    NotFound { path: PathBuf },

    /// The file extension does not name a known data format.
    #[error("unsupported data format for {path}; expected .json, .yaml or .yml")]
    UnsupportedFormat { path: PathBuf },

    /// JSON parse error; carries line/column context from serde_json.
    #[error("failed to parse JSON data at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parse error; carries line/column context from serde_yaml.
    #[error("failed to parse YAML data at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Templates are rendered against a mapping; any other root is rejected.
    #[error("data root at {path} must be a mapping, found {found}")]
    RootNotMapping { path: PathBuf, found: &'static str },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> DataError {
    DataError::Io {
        path: path.into(),
        source,
    }
}
