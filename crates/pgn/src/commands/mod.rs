//! CLI command implementations.

pub(crate) mod menu;
pub(crate) mod open;
pub(crate) mod themes;

use std::path::PathBuf;

use clap::Args;
use pgn_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use menu::MenuArgs;
pub(crate) use open::OpenArgs;
pub(crate) use themes::ThemesArgs;

/// Configuration arguments shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover pgn.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Disable analytics event forwarding.
    #[arg(long)]
    no_analytics: bool,
}

impl ConfigArgs {
    /// Load config with CLI overrides applied.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            analytics_enabled: self.no_analytics.then_some(false),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
