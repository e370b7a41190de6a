//! `fastache check`: compile templates without rendering.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use super::compile_template;

/// Arguments for `fastache check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Template files to compile.
    #[arg(required = true)]
    pub templates: Vec<PathBuf>,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let mut failed = 0;
        for path in &self.templates {
            match compile_template(path) {
                Ok(template) => {
                    tracing::debug!(tokens = template.tokens().len(), "compiled");
                    println!("✓ {}", path.display());
                }
                Err(err) => {
                    failed += 1;
                    println!("✗ {}: {err:#}", path.display());
                }
            }
        }
        if failed > 0 {
            bail!("{failed} of {} templates failed to compile", self.templates.len());
        }
        Ok(())
    }
}
