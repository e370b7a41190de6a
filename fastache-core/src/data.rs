//! Loading host data files.
//!
//! The format is chosen from the file extension:
//!
//! | Extension        | Parser       |
//! |------------------|--------------|
//! | `.json`          | `serde_json` |
//! | `.yaml`, `.yml`  | `serde_yaml` |
//!
//! The root of a data file must be a mapping; it becomes the root scope of a
//! render.

use std::path::Path;

use crate::error::{io_err, DataError};
use crate::value::Value;

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Pick a format from the extension of `path`, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None,
        }
    }
}

/// Load a data file into a [`Value`].
///
/// Returns `DataError::NotFound` if absent, `DataError::Json` / `DataError::Yaml`
/// (with path + line context) if malformed, and `DataError::RootNotMapping`
/// if the document is not a mapping.
pub fn load_data(path: &Path) -> Result<Value, DataError> {
    let format = DataFormat::from_path(path).ok_or_else(|| DataError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    if !path.exists() {
        return Err(DataError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let value = parse_with_path(&contents, format, path)?;
    if value.as_mapping().is_none() {
        return Err(DataError::RootNotMapping {
            path: path.to_path_buf(),
            found: value.type_name(),
        });
    }
    Ok(value)
}

/// Parse in-memory text. Unlike [`load_data`], any root type is accepted.
pub fn parse_data(text: &str, format: DataFormat) -> Result<Value, DataError> {
    parse_with_path(text, format, Path::new("<memory>"))
}

fn parse_with_path(text: &str, format: DataFormat, path: &Path) -> Result<Value, DataError> {
    match format {
        DataFormat::Json => serde_json::from_str(text).map_err(|e| DataError::Json {
            path: path.to_path_buf(),
            source: e,
        }),
        DataFormat::Yaml => serde_yaml::from_str(text).map_err(|e| DataError::Yaml {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
