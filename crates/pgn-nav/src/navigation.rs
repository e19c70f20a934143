//! Navigation tree builder.
//!
//! Turns resolved [`CategoryGroup`]s into menu sections for UI presentation.
//! Navigation is a view layer over the grouped content; ordering is the
//! content source's responsibility and is kept as given.
//!
//! # Example
//!
//! ```
//! use pgn_nav::{CategoryGroup, ContentRecord, build_navigation};
//!
//! let groups = vec![CategoryGroup::new(
//!     "Buttons",
//!     vec![ContentRecord::new("b1", "/b1", "Button")],
//! )];
//!
//! let nav = build_navigation(&groups);
//! assert_eq!(nav.len(), 1);
//! assert_eq!(nav[0].items[0].label, "Button");
//! ```

use serde::Serialize;

use crate::item::{RenderedNavItem, render_nav_item};
use crate::record::CategoryGroup;

/// Collapsible menu section for one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedCategory {
    /// Section title (the category label).
    pub title: String,
    /// Entries in display order.
    pub items: Vec<RenderedNavItem>,
}

/// Build menu sections from category groups.
///
/// Structure-preserving: one section per group in input order, one entry per
/// record in item order. Duplicate labels are not merged and yield separate
/// sections.
#[must_use]
pub fn build_navigation(groups: &[CategoryGroup]) -> Vec<RenderedCategory> {
    let nav: Vec<_> = groups.iter().map(build_category).collect();
    tracing::debug!(sections = nav.len(), "Navigation built");
    nav
}

fn build_category(group: &CategoryGroup) -> RenderedCategory {
    RenderedCategory {
        title: group.label.clone(),
        items: group.items.iter().map(render_nav_item).collect(),
    }
}
