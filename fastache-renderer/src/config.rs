//! Render configuration.
//!
//! Every field has a default, so an empty YAML document is a valid config:
//!
//! ```yaml
//! true_literal: "yes"
//! false_literal: "no"
//! marker_open: "[["
//! marker_close: "]]"
//! diagnostics: deduplicated
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which diagnostics a failed lookup produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticPolicy {
    /// A lookup failing before the last path segment reports the partial
    /// path; a failed variable additionally reports its full path. One
    /// failure can therefore produce two warnings.
    #[default]
    Detailed,
    /// A failed variable reports its full path once. Sections still report
    /// failures before the last segment, once.
    Deduplicated,
}

/// Options that shape rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Text written for a `true` variable.
    pub true_literal: String,
    /// Text written for a `false` variable.
    pub false_literal: String,
    /// Written before the type name of a non-scalar variable.
    pub marker_open: String,
    /// Written after the type name of a non-scalar variable.
    pub marker_close: String,
    pub diagnostics: DiagnosticPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            true_literal: "True".to_owned(),
            false_literal: "False".to_owned(),
            marker_open: "<-<-< ".to_owned(),
            marker_close: " >->->".to_owned(),
            diagnostics: DiagnosticPolicy::default(),
        }
    }
}

impl RenderOptions {
    /// Load options from a YAML file.
    ///
    /// Returns `ConfigError::NotFound` if absent,
    /// `ConfigError::Parse` (with path + line context) if malformed YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if contents.trim().is_empty() {
            return Ok(RenderOptions::default());
        }
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
