//! Rendering to a named destination file.
//!
//! ## `render_to_file` protocol
//!
//! 1. Render into `<path>.fastache.tmp` through a buffered writer.
//! 2. Flush and close the temp file.
//! 3. Rename to the final path (atomic on POSIX).
//!
//! A failed render removes the temp file and leaves any existing
//! destination untouched.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use fastache_core::Value;

use crate::diagnostics::LogDiagnostics;
use crate::engine::{RenderSummary, Renderer};
use crate::error::{destination_err, RenderError};
use crate::template::Template;

impl Renderer {
    /// Render `template` into the file at `path`, replacing it atomically.
    ///
    /// Diagnostics go to `tracing`, tagged with the destination path. Any
    /// I/O failure is reported as [`RenderError::Destination`].
    pub fn render_to_file(
        &self,
        template: &Template,
        data: &Value,
        path: &Path,
    ) -> Result<RenderSummary, RenderError> {
        let tmp = PathBuf::from(format!("{}.fastache.tmp", path.display()));
        let result = render_via_tmp(self, template, data, path, &tmp);
        if result.is_err() {
            let _ = std::fs::remove_file(&tmp);
        }
        result
    }
}

fn render_via_tmp(
    renderer: &Renderer,
    template: &Template,
    data: &Value,
    path: &Path,
    tmp: &Path,
) -> Result<RenderSummary, RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| destination_err(parent, e))?;
    }

    let file = File::create(tmp).map_err(|e| destination_err(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut diagnostics = LogDiagnostics::for_destination(path.display().to_string());

    let summary = renderer
        .render(template, data, &mut writer, &mut diagnostics)
        .map_err(|e| match e {
            RenderError::Io(source) => destination_err(path, source),
            other => other,
        })?;
    writer.flush().map_err(|e| destination_err(path, e))?;
    drop(writer);

    std::fs::rename(tmp, path).map_err(|e| destination_err(path, e))?;
    tracing::info!(path = %path.display(), warnings = summary.warnings, "wrote");
    Ok(summary)
}
