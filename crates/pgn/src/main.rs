//! pgn CLI - documentation site menu.
//!
//! Provides commands for:
//! - `menu`: Build the side menu from content pages as JSON or HTML
//! - `themes`: List configured themes
//! - `open`: Resolve a static menu entry and emit its tracking event

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{MenuArgs, OpenArgs, ThemesArgs};
use output::Output;

/// pgn - Documentation site menu.
#[derive(Parser)]
#[command(name = "pgn", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the side menu.
    Menu(MenuArgs),
    /// List configured themes.
    Themes(ThemesArgs),
    /// Resolve a static menu entry by label and emit its tracking event.
    Open(OpenArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Menu(args) => args.execute(),
        Commands::Themes(args) => args.execute(),
        Commands::Open(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
