pub mod check;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};
use fastache_renderer::{Diagnostic, Diagnostics, Template};

/// Prints each diagnostic as a `file:line: severity: message` line on stderr.
struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// Compile a template file, printing each syntax error to stderr.
pub(crate) fn compile_template(path: &Path) -> Result<Template> {
    Template::from_file_reporting(path, &mut StderrDiagnostics)
        .with_context(|| format!("failed to compile {}", path.display()))
}
