//! Hand-authored menu sections.
//!
//! Guides, Foundations and Tools are fixed configuration; they are not
//! derived from the content index.

use serde::Serialize;

use crate::analytics::{AnalyticsSink, PLAYGROUND_VISIT_EVENT};

/// Foundation page names, in menu order.
pub const FOUNDATION_LINKS: &[&str] = &[
    "Colors",
    "Elevation",
    "Typography",
    "Layout",
    "Spacing",
    "Icons",
    "CSS-Utilities",
    "Responsive",
    "Brand-icons",
];

const CONTRIBUTING_URL: &str = "https://openedx.atlassian.net/wiki/spaces/BPL/pages/1773502564/Component+Contribution+Process";

/// Link inside a static section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaticEntry {
    /// Display label.
    pub label: String,
    /// Route or absolute URL.
    pub target: String,
    /// Opens outside the site (new tab).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
    /// Short badge text shown next to the label (e.g., "Beta").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Tracking event emitted when the entry is activated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_event: Option<String>,
}

impl StaticEntry {
    /// Create an internal link.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            external: false,
            badge: None,
            track_event: None,
        }
    }

    /// Create a link that leaves the site.
    pub fn external(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            external: true,
            ..Self::new(label, target)
        }
    }

    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    #[must_use]
    pub fn with_track_event(mut self, event: impl Into<String>) -> Self {
        self.track_event = Some(event.into());
        self
    }

    /// Handle a user activating this entry.
    ///
    /// Emits the entry's tracking event, if it has one, exactly once.
    pub fn activate(&self, sink: &dyn AnalyticsSink) {
        if let Some(event) = &self.track_event {
            sink.track(event);
        }
    }
}

/// Titled group of static links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaticSection {
    pub title: String,
    pub entries: Vec<StaticEntry>,
}

impl StaticSection {
    pub fn new(title: impl Into<String>, entries: Vec<StaticEntry>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }

    /// Find an entry by its label.
    #[must_use]
    pub fn entry(&self, label: &str) -> Option<&StaticEntry> {
        self.entries.iter().find(|e| e.label == label)
    }
}

/// Build a Foundations entry from a page name.
///
/// The route is the lowercased, trimmed name; the label replaces dashes
/// with spaces.
///
/// # Examples
///
/// ```
/// use pgn_nav::foundation_entry;
///
/// let entry = foundation_entry("CSS-Utilities");
/// assert_eq!(entry.target, "/foundations/css-utilities");
/// assert_eq!(entry.label, "CSS Utilities");
/// ```
#[must_use]
pub fn foundation_entry(name: &str) -> StaticEntry {
    StaticEntry::new(
        name.replace('-', " "),
        format!("/foundations/{}", name.trim().to_lowercase()),
    )
}

#[must_use]
pub fn guides_section() -> StaticSection {
    StaticSection::new(
        "Guides",
        vec![
            StaticEntry::new("Getting started", "/guides/installation-and-usage"),
            StaticEntry::external("Contributing", CONTRIBUTING_URL),
        ],
    )
}

#[must_use]
pub fn foundations_section() -> StaticSection {
    StaticSection::new(
        "Foundations",
        FOUNDATION_LINKS.iter().map(|name| foundation_entry(name)).collect(),
    )
}

#[must_use]
pub fn tools_section() -> StaticSection {
    StaticSection::new(
        "Tools",
        vec![
            StaticEntry::new("Usage Insights", "/insights"),
            StaticEntry::new("Playground", "/playground")
                .with_badge("Beta")
                .with_track_event(PLAYGROUND_VISIT_EVENT),
            StaticEntry::new("Component Generator", "/tools/component-generator"),
        ],
    )
}

/// Guides, Foundations and Tools, in menu order.
#[must_use]
pub fn default_sections() -> Vec<StaticSection> {
    vec![guides_section(), foundations_section(), tools_section()]
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        events: RefCell<Vec<String>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn track(&self, event: &str) {
            self.events.borrow_mut().push(event.to_owned());
        }
    }

    #[test]
    fn test_default_sections_order() {
        let titles: Vec<_> = default_sections().into_iter().map(|s| s.title).collect();

        assert_eq!(titles, vec!["Guides", "Foundations", "Tools"]);
    }

    #[test]
    fn test_foundation_entries() {
        let section = foundations_section();

        assert_eq!(section.entries.len(), FOUNDATION_LINKS.len());
        assert_eq!(section.entries[0].label, "Colors");
        assert_eq!(section.entries[0].target, "/foundations/colors");
        let brand = section.entry("Brand icons").unwrap();
        assert_eq!(brand.target, "/foundations/brand-icons");
    }

    #[test]
    fn test_foundation_entry_trims_route() {
        let entry = foundation_entry(" Spacing ");

        assert_eq!(entry.target, "/foundations/spacing");
    }

    #[test]
    fn test_contributing_is_external() {
        let guides = guides_section();

        assert!(guides.entry("Contributing").unwrap().external);
        assert!(!guides.entry("Getting started").unwrap().external);
    }

    #[test]
    fn test_playground_activation_emits_event_once() {
        let tools = tools_section();
        let sink = RecordingSink::default();

        tools.entry("Playground").unwrap().activate(&sink);

        assert_eq!(*sink.events.borrow(), vec![PLAYGROUND_VISIT_EVENT.to_owned()]);
    }

    #[test]
    fn test_other_entries_emit_nothing() {
        let tools = tools_section();
        let sink = RecordingSink::default();

        tools.entry("Usage Insights").unwrap().activate(&sink);
        tools.entry("Component Generator").unwrap().activate(&sink);

        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn test_playground_has_beta_badge() {
        let tools = tools_section();

        assert_eq!(
            tools.entry("Playground").unwrap().badge.as_deref(),
            Some("Beta")
        );
    }

    #[test]
    fn test_entry_serialization_skips_defaults() {
        let json = serde_json::to_value(StaticEntry::new("Usage Insights", "/insights")).unwrap();

        assert_eq!(json["label"], "Usage Insights");
        assert!(json.get("external").is_none());
        assert!(json.get("badge").is_none());
        assert!(json.get("track_event").is_none());
    }
}
