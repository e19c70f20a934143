//! Single menu entry rendering.

use serde::Serialize;

use crate::record::ContentRecord;

/// Status marker that flags a page as being phased out.
const DEPRECATION_MARKER: &str = "deprecate";

/// Menu entry for a content page.
///
/// Deprecated entries are shown muted with a hover annotation reading
/// "Deprecated"; all others are plain links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedNavItem {
    /// Link target (the record slug, passed through).
    pub target: String,
    /// Display label.
    pub label: String,
    /// Whether the page is deprecated.
    pub deprecated: bool,
}

/// Check a lifecycle status for the deprecation marker.
///
/// Case-insensitive substring match; `None` is never deprecated.
///
/// # Examples
///
/// ```
/// use pgn_nav::is_deprecated;
///
/// assert!(is_deprecated(Some("Deprecated")));
/// assert!(is_deprecated(Some("deprecated-soon")));
/// assert!(!is_deprecated(Some("Stable")));
/// assert!(!is_deprecated(None));
/// ```
#[must_use]
pub fn is_deprecated(status: Option<&str>) -> bool {
    status.is_some_and(|s| s.to_lowercase().contains(DEPRECATION_MARKER))
}

/// Map a content record to its menu entry.
#[must_use]
pub fn render_nav_item(record: &ContentRecord) -> RenderedNavItem {
    RenderedNavItem {
        target: record.slug.clone(),
        label: record.title.clone(),
        deprecated: is_deprecated(record.status.as_deref()),
    }
}
