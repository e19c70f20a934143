//! Navigation menu model for the design-system documentation site.
//!
//! This crate provides:
//! - [`ContentRecord`] and [`CategoryGroup`]: resolved content handed in by a content source
//! - [`build_navigation`]: category groups to rendered menu sections
//! - [`render_nav_item`]: a single record to a menu entry, with deprecation marking
//! - [`ThemeSelector`]: explicit session context holding the selected theme
//! - [`default_sections`]: the hand-authored Guides, Foundations and Tools sections
//! - [`Menu`]: the assembled menu ready for a view layer
//!
//! # Quick Start
//!
//! ```
//! use pgn_nav::{CategoryGroup, ContentRecord, Menu, ThemeOption, ThemeSelector, default_sections};
//!
//! let groups = vec![CategoryGroup::new(
//!     "Buttons",
//!     vec![ContentRecord::new("b1", "/b1", "Button")],
//! )];
//! let mut theme = ThemeSelector::new(vec![ThemeOption::new("dark", "Dark")], "dark");
//! theme.select("dark");
//!
//! let menu = Menu::assemble(&theme, default_sections(), &groups);
//! assert_eq!(menu.categories[0].title, "Buttons");
//! ```

mod analytics;
mod item;
mod menu;
mod navigation;
mod record;
mod sections;
mod theme;

pub use analytics::{AnalyticsSink, NoopAnalytics, PLAYGROUND_VISIT_EVENT, TracingAnalytics};
pub use item::{RenderedNavItem, is_deprecated, render_nav_item};
pub use menu::Menu;
pub use navigation::{RenderedCategory, build_navigation};
pub use record::{CategoryGroup, ContentRecord};
pub use sections::{
    FOUNDATION_LINKS, StaticEntry, StaticSection, default_sections, foundation_entry,
    foundations_section, guides_section, tools_section,
};
pub use theme::{ThemeButton, ThemeOption, ThemeSelector};
