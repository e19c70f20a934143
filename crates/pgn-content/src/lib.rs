//! Content index for documentation pages.
//!
//! Scans a source directory for markdown pages, reads their YAML front
//! matter and groups the resulting [`ContentRecord`]s by category or type,
//! ready for [`pgn_nav::build_navigation`].
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), pgn_content::ContentError> {
//! use pgn_content::ContentIndex;
//!
//! let index = ContentIndex::load("src/pages")?;
//! let groups = index.group_by_category();
//! let nav = pgn_nav::build_navigation(&groups);
//! # Ok(())
//! # }
//! ```
//!
//! [`ContentRecord`]: pgn_nav::ContentRecord

mod error;
mod front_matter;
mod index;
mod scanner;

pub use error::ContentError;
pub use front_matter::FrontMatter;
pub use index::{ContentIndex, IndexedPage};
