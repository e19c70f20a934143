//! `pgn menu` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use pgn_config::Config;
use pgn_content::ContentIndex;
use pgn_html::{MenuPage, PackageLink, render_menu};
use pgn_nav::{Menu, ThemeSelector, default_sections};

use crate::commands::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Output format for the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Json,
    Html,
}

/// How content pages are bucketed into sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum GroupBy {
    #[default]
    Category,
    Type,
}

/// Arguments for the menu command.
#[derive(Args)]
pub(crate) struct MenuArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Selected theme id (default: configured default theme).
    #[arg(short, long)]
    theme: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    /// Section grouping for content pages.
    #[arg(long, value_enum, default_value_t)]
    group_by: GroupBy,

    /// Route of the current page, highlighted in HTML output.
    #[arg(long)]
    active: Option<String>,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl MenuArgs {
    /// Execute the menu command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        output.info(&format!(
            "Content directory: {}",
            config.docs_resolved.source_dir.display()
        ));
        let index = ContentIndex::load(&config.docs_resolved.source_dir)?;
        if index.is_empty() {
            output.warning("No menu pages found (pages need a `type` in their front matter)");
        }

        let mut theme = config.theme_selector();
        if let Some(id) = &self.theme {
            select_theme(&mut theme, id, &output);
        }

        let menu = assemble(&theme, &index, self.group_by);
        let page = MenuPage {
            active_path: self.active,
            package: package_link(&config),
        };
        let rendered = render(&menu, &page, self.format)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, rendered)?;
                output.success(&format!("Menu written to {}", path.display()));
            }
            None => output.result(&rendered)?,
        }

        Ok(())
    }
}

/// Apply a theme choice, warning when it matches no configured option.
fn select_theme(theme: &mut ThemeSelector, id: &str, output: &Output) {
    theme.select(id);
    if theme.selected_option().is_none() {
        output.warning(&format!("Theme '{id}' is not configured; no theme will be highlighted"));
    }
}

fn assemble(theme: &ThemeSelector, index: &ContentIndex, group_by: GroupBy) -> Menu {
    let groups = match group_by {
        GroupBy::Category => index.group_by_category(),
        GroupBy::Type => index.group_by_type(),
    };
    let menu = Menu::assemble(theme, default_sections(), &groups);
    tracing::info!(
        categories = menu.categories.len(),
        theme = theme.selected(),
        "Assembled menu"
    );
    menu
}

fn package_link(config: &Config) -> Option<PackageLink> {
    config.package.as_ref().map(|package| PackageLink {
        name: package.name.clone(),
        url: package.url.clone(),
        badge_url: package.badge_url.clone(),
    })
}

fn render(menu: &Menu, page: &MenuPage, format: Format) -> Result<String, CliError> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(menu)?),
        Format::Html => Ok(render_menu(menu, page)),
    }
}

#[cfg(test)]
mod tests {
    use pgn_content::IndexedPage;
    use pgn_nav::{ContentRecord, ThemeOption};

    use super::*;

    fn index() -> ContentIndex {
        ContentIndex::from_pages(vec![
            IndexedPage {
                record: ContentRecord::new("b1", "/b1", "Button").with_categories(["Buttons"]),
                page_type: "component".to_owned(),
            },
            IndexedPage {
                record: ContentRecord::new("b2", "/b2", "Badge")
                    .with_categories(["Badges"])
                    .with_status("Deprecated"),
                page_type: "component".to_owned(),
            },
        ])
    }

    fn theme() -> ThemeSelector {
        ThemeSelector::new(
            vec![
                ThemeOption::new("light", "Light"),
                ThemeOption::new("dark", "Dark"),
            ],
            "light",
        )
    }

    #[test]
    fn test_assemble_by_category() {
        let menu = assemble(&theme(), &index(), GroupBy::Category);

        let titles: Vec<_> = menu.categories.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Badges", "Buttons"]);
        assert!(menu.categories[0].items[0].deprecated);
    }

    #[test]
    fn test_assemble_by_type() {
        let menu = assemble(&theme(), &index(), GroupBy::Type);

        assert_eq!(menu.categories.len(), 1);
        assert_eq!(menu.categories[0].title, "component");
        assert_eq!(menu.categories[0].items.len(), 2);
    }

    #[test]
    fn test_select_theme_updates_buttons() {
        let mut theme = theme();

        select_theme(&mut theme, "dark", &Output::new());
        let menu = assemble(&theme, &index(), GroupBy::Category);

        assert!(menu.themes[1].selected);
    }

    #[test]
    fn test_render_json() {
        let menu = assemble(&theme(), &index(), GroupBy::Category);

        let json = render(&menu, &MenuPage::default(), Format::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["categories"][1]["items"][0]["target"], "/b1");
        assert_eq!(value["themes"][0]["selected"], true);
    }

    #[test]
    fn test_render_html() {
        let menu = assemble(&theme(), &index(), GroupBy::Category);

        let html = render(&menu, &MenuPage::default(), Format::Html).unwrap();

        assert!(html.starts_with("<div class=\"pgn-doc__menu\">"));
        assert!(html.contains("<summary>Badges</summary>"));
    }

    #[test]
    fn test_package_link_from_config() {
        let config: Config = toml::from_str(
            "[package]\nname = \"pkg\"\nurl = \"https://example.com/pkg\"\n",
        )
        .unwrap();

        let link = package_link(&config).unwrap();

        assert_eq!(link.url, "https://example.com/pkg");
        assert!(link.badge_url.is_none());
    }
}
