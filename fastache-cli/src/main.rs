//! fastache: render logic-less templates from the command line.
//!
//! # Usage
//!
//! ```text
//! fastache check <TEMPLATE>...
//! fastache render <TEMPLATE> [--data <FILE>] [--output <FILE>] [--config <FILE>] [--strict]
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG` to adjust (default `info`).

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{check::CheckArgs, render::RenderArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "fastache",
    version,
    about = "Compile and render logic-less templates",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile templates and report syntax errors without rendering.
    Check(CheckArgs),

    /// Render a template against a JSON or YAML data file.
    Render(RenderArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Check(args) => args.run(),
        Commands::Render(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
