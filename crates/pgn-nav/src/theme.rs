//! Theme selection.
//!
//! [`ThemeSelector`] is the session-scoped context that owns the selected
//! theme. It is passed explicitly to whatever renders the menu.

use serde::{Deserialize, Serialize};

/// A selectable visual variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOption {
    /// Stable identifier (e.g., "openedx").
    pub id: String,
    /// Button label.
    pub label: String,
}

impl ThemeOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Theme switcher button state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeButton {
    pub id: String,
    pub label: String,
    /// Whether this option is the active theme.
    pub selected: bool,
}

/// Session context holding the selected theme.
///
/// The selection is not validated against the options: an unknown id is
/// kept and simply highlights no button.
#[derive(Clone, Debug)]
pub struct ThemeSelector {
    options: Vec<ThemeOption>,
    selected: String,
    revision: u64,
}

impl ThemeSelector {
    /// Create a selector with an externally supplied initial theme.
    pub fn new(options: Vec<ThemeOption>, initial: impl Into<String>) -> Self {
        Self {
            options,
            selected: initial.into(),
            revision: 0,
        }
    }

    /// Make `id` the selected theme. Last write wins.
    ///
    /// The revision advances only when the selection actually changes, so
    /// consumers comparing revisions re-render once per change.
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        if id == self.selected {
            return;
        }
        tracing::debug!(from = %self.selected, to = %id, "Theme selected");
        self.selected = id;
        self.revision += 1;
    }

    /// Currently selected theme id.
    #[must_use]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Change counter, bumped on every effective [`select`](Self::select).
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Configured options in display order.
    #[must_use]
    pub fn options(&self) -> &[ThemeOption] {
        &self.options
    }

    /// Option matching the current selection, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&ThemeOption> {
        self.options.iter().find(|o| o.id == self.selected)
    }

    /// Button state for every option.
    #[must_use]
    pub fn buttons(&self) -> Vec<ThemeButton> {
        self.options
            .iter()
            .map(|option| ThemeButton {
                id: option.id.clone(),
                label: option.label.clone(),
                selected: option.id == self.selected,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> ThemeSelector {
        ThemeSelector::new(
            vec![
                ThemeOption::new("light", "Light"),
                ThemeOption::new("dark", "Dark"),
            ],
            "light",
        )
    }

    #[test]
    fn test_initial_selection() {
        let theme = selector();

        assert_eq!(theme.selected(), "light");
        assert_eq!(theme.revision(), 0);
    }

    #[test]
    fn test_select_then_read() {
        let mut theme = selector();

        theme.select("dark");

        assert_eq!(theme.selected(), "dark");
    }

    #[test]
    fn test_second_select_overwrites() {
        let mut theme = selector();

        theme.select("dark");
        theme.select("light");

        assert_eq!(theme.selected(), "light");
        assert_eq!(theme.revision(), 2);
    }

    #[test]
    fn test_reselecting_same_theme_keeps_revision() {
        let mut theme = selector();

        theme.select("light");

        assert_eq!(theme.revision(), 0);
    }

    #[test]
    fn test_unknown_id_is_accepted_and_highlights_nothing() {
        let mut theme = selector();

        theme.select("solarized");

        assert_eq!(theme.selected(), "solarized");
        assert!(theme.selected_option().is_none());
        assert!(theme.buttons().iter().all(|b| !b.selected));
    }

    #[test]
    fn test_buttons_mark_selected_option() {
        let mut theme = selector();
        theme.select("dark");

        let buttons = theme.buttons();

        assert_eq!(buttons.len(), 2);
        assert!(!buttons[0].selected);
        assert!(buttons[1].selected);
        assert_eq!(buttons[1].label, "Dark");
    }
}
