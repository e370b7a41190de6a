//! `fastache render`: render a template to stdout or a file.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use fastache_core::load_data;
use fastache_renderer::{LogDiagnostics, RenderOptions, Renderer};

use super::compile_template;

/// Arguments for `fastache render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Template file to render.
    pub template: PathBuf,

    /// JSON or YAML data file; its root mapping is the outermost scope.
    #[arg(long, short)]
    pub data: PathBuf,

    /// Write to this file (atomically) instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// YAML file with render options.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exit with an error when any variable could not be resolved.
    #[arg(long)]
    pub strict: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let options = match &self.config {
            Some(path) => RenderOptions::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => RenderOptions::default(),
        };
        let renderer = Renderer::with_options(options);

        let template = compile_template(&self.template)?;
        let data = load_data(&self.data)
            .with_context(|| format!("failed to load data {}", self.data.display()))?;

        let summary = match &self.output {
            Some(path) => renderer
                .render_to_file(&template, &data, path)
                .with_context(|| format!("render failed for {}", template.name()))?,
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                let mut diagnostics = LogDiagnostics::for_destination("<stdout>");
                let summary = renderer
                    .render(&template, &data, &mut out, &mut diagnostics)
                    .with_context(|| format!("render failed for {}", template.name()))?;
                out.flush().context("error writing to stdout")?;
                summary
            }
        };

        if self.strict && summary.warnings > 0 {
            bail!(
                "{} unresolved variable warning(s) while rendering {}",
                summary.warnings,
                template.name()
            );
        }
        Ok(())
    }
}
