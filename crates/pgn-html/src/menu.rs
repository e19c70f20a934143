//! Side menu template.
//!
//! Layout, top to bottom: theme switcher, Guides/Foundations/Tools
//! collapsibles, one collapsible per component category, package footer.

use std::fmt::Write;

use pgn_nav::{Menu, RenderedCategory, RenderedNavItem, StaticEntry, StaticSection, ThemeButton};

use crate::escape::escape;

/// Link to the published package, shown under the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageLink {
    pub name: String,
    pub url: String,
    pub badge_url: Option<String>,
}

/// Per-page rendering context.
#[derive(Clone, Debug, Default)]
pub struct MenuPage {
    /// Route of the page being viewed; the matching link is highlighted.
    pub active_path: Option<String>,
    /// Optional package footer.
    pub package: Option<PackageLink>,
}

impl MenuPage {
    fn is_active(&self, target: &str) -> bool {
        self.active_path.as_deref() == Some(target)
    }
}

/// Tooltip element id for a deprecated entry.
///
/// Non-alphanumeric characters of the target collapse to single dashes and
/// `ordinal` is appended, so ids stay unique within one rendered menu even
/// when targets sanitize alike or a page is listed twice.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     pgn_html::tooltip_id("/components/badge/", 1),
///     "tooltip-deprecated-components-badge-1"
/// );
/// ```
#[must_use]
pub fn tooltip_id(target: &str, ordinal: usize) -> String {
    let mut id = String::from("tooltip-deprecated");
    let mut pending_dash = false;
    for c in target.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash || id.len() == "tooltip-deprecated".len() {
                id.push('-');
            }
            pending_dash = false;
            id.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    let _ = write!(id, "-{ordinal}");
    id
}

/// Render the complete side menu.
#[must_use]
pub fn render_menu(menu: &Menu, page: &MenuPage) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<div class=\"pgn-doc__menu\">\n");

    render_theme_switcher(&mut html, &menu.themes);

    html.push_str("<div class=\"pgn-doc__menu-items\">\n");
    for section in &menu.sections {
        render_static_section(&mut html, section, page);
    }
    html.push_str("<div class=\"pgn-doc__menu-component-list\">\n");
    let mut tooltips = 0;
    for category in &menu.categories {
        render_category(&mut html, category, page, &mut tooltips);
    }
    html.push_str("</div>\n</div>\n");

    if let Some(package) = &page.package {
        render_package(&mut html, package);
    }

    html.push_str("</div>");
    html
}

fn render_theme_switcher(html: &mut String, themes: &[ThemeButton]) {
    html.push_str("<h2 class=\"pgn-doc__menu-title\">Theme</h2>\n");
    html.push_str("<div class=\"pgn-doc__menu-btn--group\">\n");
    html.push_str("<div class=\"btn-group\" role=\"group\">\n");
    for theme in themes {
        let (variant, autofocus) = if theme.selected {
            ("btn-primary", " data-autofocus=\"true\"")
        } else {
            ("btn-outline-primary", "")
        };
        let _ = writeln!(
            html,
            "<button type=\"button\" class=\"btn {variant} btn-sm\" data-theme=\"{}\"{autofocus}>{}</button>",
            escape(&theme.id),
            escape(&theme.label),
        );
    }
    html.push_str("</div>\n</div>\n");
}

fn open_collapsible(html: &mut String, class: &str, title: &str) {
    let _ = writeln!(
        html,
        "<details class=\"collapsible-basic{class}\">\n<summary>{}</summary>",
        escape(title)
    );
}

fn render_static_section(html: &mut String, section: &StaticSection, page: &MenuPage) {
    open_collapsible(html, "", &section.title);
    html.push_str("<ul class=\"list-unstyled\">\n");
    for entry in &section.entries {
        html.push_str("<li>");
        render_static_entry(html, entry, page);
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n</details>\n");
}

fn render_static_entry(html: &mut String, entry: &StaticEntry, page: &MenuPage) {
    let _ = write!(html, "<a href=\"{}\"", escape(&entry.target));
    if entry.external {
        html.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
    }
    if page.is_active(&entry.target) {
        html.push_str(" class=\"active\" aria-current=\"page\"");
    }
    if let Some(event) = &entry.track_event {
        let _ = write!(html, " data-track-event=\"{}\"", escape(event));
    }
    let _ = write!(html, ">{}", escape(&entry.label));
    if let Some(badge) = &entry.badge {
        let _ = write!(
            html,
            "<span class=\"badge badge-warning ml-1\">{}</span>",
            escape(badge)
        );
    }
    html.push_str("</a>");
}

fn render_category(
    html: &mut String,
    category: &RenderedCategory,
    page: &MenuPage,
    tooltips: &mut usize,
) {
    open_collapsible(
        html,
        " pgn-doc__menu-component--list-category",
        &category.title,
    );
    html.push_str("<ul class=\"list-unstyled\">\n");
    for item in &category.items {
        render_nav_item(html, item, page, tooltips);
    }
    html.push_str("</ul>\n</details>\n");
}

/// Deprecated items are muted and carry a hover annotation.
///
/// `tooltips` counts annotations rendered so far in the document.
fn render_nav_item(
    html: &mut String,
    item: &RenderedNavItem,
    page: &MenuPage,
    tooltips: &mut usize,
) {
    html.push_str("<li class=\"d-flex align-items-center\">");

    let mut classes = Vec::new();
    if item.deprecated {
        classes.push("text-muted");
    }
    if page.is_active(&item.target) {
        classes.push("active");
    }

    let _ = write!(html, "<a href=\"{}\"", escape(&item.target));
    if !classes.is_empty() {
        let _ = write!(html, " class=\"{}\"", classes.join(" "));
    }

    if item.deprecated {
        *tooltips += 1;
        let id = tooltip_id(&item.target, *tooltips);
        let _ = write!(
            html,
            " title=\"Deprecated\" aria-describedby=\"{id}\">{}</a>\
             <span role=\"tooltip\" id=\"{id}\" class=\"tooltip\" data-placement=\"right\" hidden>Deprecated</span>",
            escape(&item.label),
        );
    } else {
        let _ = write!(html, ">{}</a>", escape(&item.label));
    }

    html.push_str("</li>\n");
}

fn render_package(html: &mut String, package: &PackageLink) {
    let _ = write!(
        html,
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"{}\">",
        escape(&package.url),
        escape(&package.name),
    );
    match &package.badge_url {
        Some(badge_url) => {
            let _ = write!(
                html,
                "<img class=\"d-inline-block mr-2\" src=\"{}\" alt=\"{}\" width=\"94\" height=\"20\">",
                escape(badge_url),
                escape(&package.name),
            );
        }
        None => html.push_str(&escape(&package.name)),
    }
    html.push_str("</a>\n");
}

#[cfg(test)]
mod tests {
    use pgn_nav::{
        CategoryGroup, ContentRecord, PLAYGROUND_VISIT_EVENT, ThemeOption, ThemeSelector,
        default_sections,
    };

    use super::*;

    fn menu() -> Menu {
        let mut theme = ThemeSelector::new(
            vec![
                ThemeOption::new("light", "Light"),
                ThemeOption::new("dark", "Dark"),
            ],
            "light",
        );
        theme.select("dark");
        let groups = vec![
            CategoryGroup::new("Buttons", vec![ContentRecord::new("b1", "/b1", "Button")]),
            CategoryGroup::new(
                "Badges",
                vec![ContentRecord::new("b2", "/b2", "Badge").with_status("Deprecated")],
            ),
        ];
        Menu::assemble(&theme, default_sections(), &groups)
    }

    #[test]
    fn render_marks_selected_theme() {
        let html = render_menu(&menu(), &MenuPage::default());

        assert!(html.contains(
            "<button type=\"button\" class=\"btn btn-primary btn-sm\" data-theme=\"dark\" data-autofocus=\"true\">Dark</button>"
        ));
        assert!(html.contains(
            "<button type=\"button\" class=\"btn btn-outline-primary btn-sm\" data-theme=\"light\">Light</button>"
        ));
    }

    #[test]
    fn render_plain_item_is_simple_link() {
        let html = render_menu(&menu(), &MenuPage::default());

        assert!(html.contains("<li class=\"d-flex align-items-center\"><a href=\"/b1\">Button</a></li>"));
    }

    #[test]
    fn render_deprecated_item_has_annotation() {
        let html = render_menu(&menu(), &MenuPage::default());

        assert!(html.contains("<a href=\"/b2\" class=\"text-muted\" title=\"Deprecated\" aria-describedby=\"tooltip-deprecated-b2-1\">Badge</a>"));
        assert!(html.contains("id=\"tooltip-deprecated-b2-1\""));
    }

    #[test]
    fn render_sections_in_order() {
        let html = render_menu(&menu(), &MenuPage::default());

        let guides = html.find("<summary>Guides</summary>").unwrap();
        let foundations = html.find("<summary>Foundations</summary>").unwrap();
        let tools = html.find("<summary>Tools</summary>").unwrap();
        let buttons = html.find("<summary>Buttons</summary>").unwrap();
        let badges = html.find("<summary>Badges</summary>").unwrap();
        assert!(guides < foundations && foundations < tools);
        assert!(tools < buttons && buttons < badges);
    }

    #[test]
    fn render_external_and_tracked_entries() {
        let html = render_menu(&menu(), &MenuPage::default());

        assert!(html.contains("target=\"_blank\" rel=\"noopener noreferrer\">Contributing</a>"));
        assert!(html.contains(&format!(
            "<a href=\"/playground\" data-track-event=\"{PLAYGROUND_VISIT_EVENT}\">Playground<span class=\"badge badge-warning ml-1\">Beta</span></a>"
        )));
        assert!(html.contains("<a href=\"/foundations/css-utilities\">CSS Utilities</a>"));
    }

    #[test]
    fn render_highlights_active_path() {
        let page = MenuPage {
            active_path: Some("/b1".to_owned()),
            package: None,
        };

        let html = render_menu(&menu(), &page);

        assert!(html.contains("<a href=\"/b1\" class=\"active\">Button</a>"));
    }

    #[test]
    fn render_package_footer() {
        let page = MenuPage {
            active_path: None,
            package: Some(PackageLink {
                name: "Paragon npm".to_owned(),
                url: "https://www.npmjs.com/package/@edx/paragon".to_owned(),
                badge_url: Some("https://img.shields.io/npm/v/@edx/paragon.svg".to_owned()),
            }),
        };

        let html = render_menu(&menu(), &page);

        assert!(html.contains("href=\"https://www.npmjs.com/package/@edx/paragon\""));
        assert!(html.contains("src=\"https://img.shields.io/npm/v/@edx/paragon.svg\""));
    }

    #[test]
    fn render_escapes_titles() {
        let theme = ThemeSelector::new(Vec::new(), "");
        let groups = vec![CategoryGroup::new(
            "<Forms>",
            vec![ContentRecord::new("x", "/x?a=1&b=2", "A & B")],
        )];
        let menu = Menu::assemble(&theme, Vec::new(), &groups);

        let html = render_menu(&menu, &MenuPage::default());

        assert!(html.contains("<summary>&lt;Forms&gt;</summary>"));
        assert!(html.contains("<a href=\"/x?a=1&amp;b=2\">A &amp; B</a>"));
    }

    #[test]
    fn tooltip_id_sanitizes_target() {
        assert_eq!(tooltip_id("/b2", 1), "tooltip-deprecated-b2-1");
        assert_eq!(
            tooltip_id("/components/Data Table/", 3),
            "tooltip-deprecated-components-data-table-3"
        );
        assert_eq!(tooltip_id("/", 2), "tooltip-deprecated-2");
    }

    #[test]
    fn render_tooltip_ids_are_unique() {
        let theme = ThemeSelector::new(Vec::new(), "");
        let badge = ContentRecord::new("b2", "/b2", "Badge").with_status("Deprecated");
        let groups = vec![
            CategoryGroup::new(
                "Content",
                vec![
                    ContentRecord::new("ab1", "/a-b", "Dash").with_status("deprecated"),
                    ContentRecord::new("ab2", "/a/b", "Slash").with_status("deprecated"),
                    badge.clone(),
                ],
            ),
            CategoryGroup::new("Status", vec![badge]),
        ];
        let menu = Menu::assemble(&theme, Vec::new(), &groups);

        let html = render_menu(&menu, &MenuPage::default());

        let ids: Vec<_> = html
            .split("<span role=\"tooltip\" id=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert_eq!(
            ids,
            vec![
                "tooltip-deprecated-a-b-1",
                "tooltip-deprecated-a-b-2",
                "tooltip-deprecated-b2-3",
                "tooltip-deprecated-b2-4",
            ]
        );
    }
}
