//! Trellis — compose and render layout/page/shared view sets.
//!
//! # Usage
//!
//! ```text
//! trellis check [--views DIR] [--layout FILE]
//! trellis list [--views DIR] [--layout FILE] [--json]
//! trellis render <layout:page> [--views DIR] [--layout FILE] [--data FILE] [--out FILE]
//! ```
//!
//! Without `--views` the bundled demo views are used.

mod commands;
mod embedded;
mod helpers;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

use commands::{check::CheckArgs, list::ListArgs, render::RenderArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    version,
    about = "Compose layout, page, and shared fragments into named templates",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose every layout × page pair and report the result.
    Check(CheckArgs),

    /// List every composed template name.
    List(ListArgs),

    /// Render one composed template to stdout or a file.
    Render(RenderArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let funcs = helpers::function_map(Utc::now());
    match cli.command {
        Commands::Check(args) => args.run(funcs),
        Commands::List(args) => args.run(funcs),
        Commands::Render(args) => args.run(funcs),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
