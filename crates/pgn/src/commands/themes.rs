//! `pgn themes` command implementation.

use clap::Args;

use crate::commands::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the themes command.
#[derive(Args)]
pub(crate) struct ThemesArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl ThemesArgs {
    /// Execute the themes command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let selector = config.theme_selector();

        let lines: Vec<_> = selector
            .buttons()
            .into_iter()
            .map(|button| {
                if button.selected {
                    format!("{} {} (default)", output.highlight(&button.id), button.label)
                } else {
                    format!("{} {}", button.id, button.label)
                }
            })
            .collect();

        output.result(&lines.join("\n"))?;
        Ok(())
    }
}
