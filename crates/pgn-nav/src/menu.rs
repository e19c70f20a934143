//! Assembled menu.

use serde::Serialize;

use crate::navigation::{RenderedCategory, build_navigation};
use crate::record::CategoryGroup;
use crate::sections::{StaticEntry, StaticSection};
use crate::theme::{ThemeButton, ThemeSelector};

/// Everything a view layer needs to draw the side menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Menu {
    /// Theme switcher buttons.
    pub themes: Vec<ThemeButton>,
    /// Hand-authored sections, shown before categories.
    pub sections: Vec<StaticSection>,
    /// One section per component category.
    pub categories: Vec<RenderedCategory>,
}

impl Menu {
    /// Assemble the menu from the current theme context and content snapshot.
    ///
    /// Recomputed from scratch on every call.
    #[must_use]
    pub fn assemble(
        theme: &ThemeSelector,
        sections: Vec<StaticSection>,
        groups: &[CategoryGroup],
    ) -> Self {
        Self {
            themes: theme.buttons(),
            sections,
            categories: build_navigation(groups),
        }
    }

    /// Find a static entry by label across all sections.
    #[must_use]
    pub fn find_entry(&self, label: &str) -> Option<&StaticEntry> {
        self.sections.iter().find_map(|section| section.entry(label))
    }
}
