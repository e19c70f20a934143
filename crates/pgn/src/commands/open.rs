//! `pgn open` command implementation.

use clap::Args;
use pgn_nav::{
    AnalyticsSink, Menu, NoopAnalytics, StaticEntry, TracingAnalytics, default_sections,
};

use crate::commands::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the open command.
#[derive(Args)]
pub(crate) struct OpenArgs {
    /// Entry label (e.g., "Playground").
    label: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl OpenArgs {
    /// Execute the open command.
    ///
    /// Prints the entry target and emits its tracking event, if any.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        let menu = Menu::assemble(&config.theme_selector(), default_sections(), &[]);
        let sink: &dyn AnalyticsSink = if config.analytics.enabled {
            &TracingAnalytics
        } else {
            &NoopAnalytics
        };

        let entry = open_entry(&menu, &self.label, sink)?;
        output.result(&entry.target)?;
        if let Some(note) = tracking_note(entry, config.analytics.enabled) {
            output.success(&note);
        }
        Ok(())
    }
}

/// Resolve an entry and activate it.
fn open_entry<'a>(
    menu: &'a Menu,
    label: &str,
    sink: &dyn AnalyticsSink,
) -> Result<&'a StaticEntry, CliError> {
    let entry = menu
        .find_entry(label)
        .ok_or_else(|| CliError::Validation(format!("No menu entry labelled '{label}'")))?;
    entry.activate(sink);
    tracing::info!(label, route = %entry.target, "Opened menu entry");
    Ok(entry)
}

/// Confirmation line for an entry that carries a tracking event.
fn tracking_note(entry: &StaticEntry, analytics_enabled: bool) -> Option<String> {
    let event = entry.track_event.as_deref()?;
    Some(if analytics_enabled {
        format!("Tracked event {event}")
    } else {
        format!("Analytics disabled; event {event} not sent")
    })
}
