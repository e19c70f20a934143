//! Static HTML rendering for the documentation menu.
//!
//! Produces the side menu markup from an assembled [`pgn_nav::Menu`]. Class
//! names follow the documentation site's stylesheet; behavior such as
//! collapsing and tooltips is left to the page's scripts.

mod escape;
mod menu;

pub use escape::escape;
pub use menu::{MenuPage, PackageLink, render_menu, tooltip_id};
