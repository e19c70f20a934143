//! Page discovery by filesystem walking.
//!
//! Discovery is separate from loading: the scanner only finds candidate
//! files and their slugs; [`ContentIndex`](crate::ContentIndex) reads them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ContentError;

/// Extensions recognised as pages.
const PAGE_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Location of a page source file.
#[derive(Debug, Clone)]
pub(crate) struct PageRef {
    /// Route (e.g., "/", "/components/button").
    pub slug: String,
    /// Path to the source file.
    pub path: PathBuf,
}

/// Walks a source directory for page files.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan the source directory.
    ///
    /// Returns an empty Vec if the source directory doesn't exist. Entries
    /// are visited in file name order so results are deterministic.
    pub fn scan(&self) -> Result<Vec<PageRef>, ContentError> {
        let mut refs = Vec::new();
        if self.source_dir.exists() {
            scan_directory(&self.source_dir, "", &mut refs)?;
        } else {
            tracing::warn!(path = %self.source_dir.display(), "Content directory does not exist");
        }
        Ok(refs)
    }
}

fn scan_directory(
    dir_path: &Path,
    url_prefix: &str,
    refs: &mut Vec<PageRef>,
) -> Result<(), ContentError> {
    let entries = fs::read_dir(dir_path).map_err(|source| ContentError::Io {
        path: dir_path.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|e| {
            let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
            (e, is_dir)
        })
        .collect();
    entries.sort_by_key(|(e, _)| e.file_name());

    for (entry, is_dir) in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }

        let path = entry.path();
        if is_dir {
            let child_prefix = if url_prefix.is_empty() {
                name
            } else {
                format!("{url_prefix}/{name}")
            };
            if let Err(e) = scan_directory(&path, &child_prefix, refs) {
                tracing::warn!(error = %e, "Skipping unreadable directory");
            }
        } else if is_page(&path) {
            refs.push(PageRef {
                slug: file_path_to_slug(Path::new(&name), url_prefix),
                path,
            });
        }
    }

    Ok(())
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| PAGE_EXTENSIONS.contains(&e))
}

/// Convert a page file name to a slug under `base`.
///
/// Examples:
/// - `index.md`, base `""` -> `"/"`
/// - `button.mdx`, base `"components"` -> `"/components/button"`
/// - `index.mdx`, base `"components/button"` -> `"/components/button"`
pub(crate) fn file_path_to_slug(rel_path: &Path, base: &str) -> String {
    let stem = rel_path.with_extension("");
    let stem = stem.to_string_lossy();

    let path_part = if stem == "index" {
        ""
    } else if let Some(without_index) = stem.strip_suffix("/index") {
        without_index
    } else {
        &*stem
    };

    match (base.is_empty(), path_part.is_empty()) {
        (true, _) => format!("/{path_part}"),
        (false, true) => format!("/{base}"),
        (false, false) => format!("/{base}/{path_part}"),
    }
}
