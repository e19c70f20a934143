//! Content index: loaded pages and their groupings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pgn_nav::{CategoryGroup, ContentRecord};

use crate::front_matter::FrontMatter;
use crate::scanner::{PageRef, Scanner};
use crate::ContentError;

/// A menu-eligible page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedPage {
    pub record: ContentRecord,
    /// Page type from front matter (e.g., "component").
    pub page_type: String,
}

/// Snapshot of the documentation pages that take part in the menu.
///
/// Pages are kept sorted by title. Pages without a `type` in their front
/// matter are not indexed.
#[derive(Clone, Debug, Default)]
pub struct ContentIndex {
    pages: Vec<IndexedPage>,
}

impl ContentIndex {
    /// Load all pages under `source_dir`.
    ///
    /// Unreadable files and malformed front matter are skipped with a
    /// warning. A missing directory yields an empty index.
    ///
    /// # Errors
    ///
    /// Returns an error if `source_dir` exists but cannot be read.
    pub fn load(source_dir: impl Into<PathBuf>) -> Result<Self, ContentError> {
        let source_dir = source_dir.into();
        let refs = Scanner::new(source_dir.clone()).scan()?;
        let scanned = refs.len();

        let pages: Vec<_> = refs.iter().filter_map(load_page).collect();

        tracing::info!(
            source_dir = %source_dir.display(),
            scanned,
            indexed = pages.len(),
            "Content index loaded"
        );

        Ok(Self::from_pages(pages))
    }

    /// Build an index from already-resolved pages.
    #[must_use]
    pub fn from_pages(mut pages: Vec<IndexedPage>) -> Self {
        pages.sort_by(|a, b| a.record.title.cmp(&b.record.title));
        Self { pages }
    }

    /// Indexed pages in title order.
    #[must_use]
    pub fn pages(&self) -> &[IndexedPage] {
        &self.pages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Group pages by category label.
    ///
    /// Groups are ordered by label; items stay in title order. A page with
    /// several categories appears in each of them.
    #[must_use]
    pub fn group_by_category(&self) -> Vec<CategoryGroup> {
        self.group_by(|page| page.record.categories.iter().map(String::as_str).collect())
    }

    /// Group pages by page type, ordered by type name.
    #[must_use]
    pub fn group_by_type(&self) -> Vec<CategoryGroup> {
        self.group_by(|page| vec![page.page_type.as_str()])
    }

    fn group_by<'a, F>(&'a self, keys: F) -> Vec<CategoryGroup>
    where
        F: Fn(&'a IndexedPage) -> Vec<&'a str>,
    {
        let mut buckets: BTreeMap<&str, Vec<ContentRecord>> = BTreeMap::new();
        for page in &self.pages {
            for key in keys(page) {
                buckets.entry(key).or_default().push(page.record.clone());
            }
        }

        buckets
            .into_iter()
            .map(|(label, items)| CategoryGroup::new(label, items))
            .collect()
    }
}

/// Read one page and turn it into an index entry.
fn load_page(page_ref: &PageRef) -> Option<IndexedPage> {
    let content = match std::fs::read_to_string(&page_ref.path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %page_ref.path.display(), error = %e, "Failed to read page, skipping");
            return None;
        }
    };

    let front_matter = match FrontMatter::parse(&content) {
        Ok(Some(fm)) => fm,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(path = %page_ref.path.display(), error = %e, "Failed to parse front matter, skipping");
            return None;
        }
    };

    let page_type = front_matter.page_type?;
    let title = front_matter
        .title
        .unwrap_or_else(|| title_from_path(&page_ref.path));

    Some(IndexedPage {
        record: ContentRecord {
            id: front_matter.id.unwrap_or_else(|| page_ref.slug.clone()),
            slug: page_ref.slug.clone(),
            title,
            categories: front_matter.categories,
            status: front_matter.status,
        },
        page_type,
    })
}

/// Derive a title from the file name (or its directory for index pages).
fn title_from_path(path: &Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned());
    let name = match stem.as_deref() {
        Some("index") | None => path
            .parent()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        Some(stem) => stem.to_owned(),
    };

    match titlecase_from_slug(&name) {
        title if title.is_empty() => "Untitled".to_owned(),
        title => title,
    }
}

/// Convert a kebab-case or `snake_case` slug to title case.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn page(id: &str, title: &str, page_type: &str, categories: &[&str]) -> IndexedPage {
        IndexedPage {
            record: ContentRecord::new(id, format!("/{id}"), title)
                .with_categories(categories.iter().copied()),
            page_type: page_type.to_owned(),
        }
    }

    fn labels(groups: &[CategoryGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.label.as_str()).collect()
    }

    fn titles(group: &CategoryGroup) -> Vec<&str> {
        group.items.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_from_pages_sorts_by_title() {
        let index = ContentIndex::from_pages(vec![
            page("t", "Toast", "component", &[]),
            page("a", "Alert", "component", &[]),
        ]);

        let titles: Vec<_> = index.pages().iter().map(|p| p.record.title.as_str()).collect();
        assert_eq!(titles, vec!["Alert", "Toast"]);
    }

    #[test]
    fn test_group_by_category() {
        let index = ContentIndex::from_pages(vec![
            page("tooltip", "Tooltip", "component", &["Overlays"]),
            page("button", "Button", "component", &["Buttons"]),
            page("modal", "Modal", "component", &["Overlays"]),
            page("icon-button", "IconButton", "component", &["Buttons", "Icons"]),
        ]);

        let groups = index.group_by_category();

        assert_eq!(labels(&groups), vec!["Buttons", "Icons", "Overlays"]);
        assert_eq!(titles(&groups[0]), vec!["Button", "IconButton"]);
        assert_eq!(titles(&groups[1]), vec!["IconButton"]);
        assert_eq!(titles(&groups[2]), vec!["Modal", "Tooltip"]);
    }

    #[test]
    fn test_repeated_category_lists_page_once() {
        let index = ContentIndex::from_pages(vec![page(
            "button",
            "Button",
            "component",
            &["Buttons", "Buttons"],
        )]);

        let groups = index.group_by_category();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 1);
    }

    #[test]
    fn test_page_without_categories_is_not_grouped() {
        let index = ContentIndex::from_pages(vec![page("hooks", "Hooks", "hook", &[])]);

        assert!(index.group_by_category().is_empty());
        assert_eq!(labels(&index.group_by_type()), vec!["hook"]);
    }

    #[test]
    fn test_group_by_type() {
        let index = ContentIndex::from_pages(vec![
            page("use-toggle", "useToggle", "hook", &[]),
            page("button", "Button", "component", &[]),
        ]);

        let groups = index.group_by_type();

        assert_eq!(labels(&groups), vec!["component", "hook"]);
    }

    #[test]
    fn test_title_from_path() {
        assert_eq!(title_from_path(Path::new("/docs/form-control.md")), "Form Control");
        assert_eq!(title_from_path(Path::new("/docs/data_table/index.mdx")), "Data Table");
        assert_eq!(title_from_path(Path::new("index.md")), "Untitled");
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let components = dir.path().join("components");
        fs::create_dir_all(components.join("badge")).unwrap();
        fs::write(
            components.join("button.mdx"),
            "---\ntitle: Button\ntype: component\ncategories: [Buttons]\n---\n",
        )
        .unwrap();
        fs::write(
            components.join("badge/index.mdx"),
            "---\ntitle: Badge\ntype: component\ncategories: [Content]\nstatus: Deprecated\n---\n",
        )
        .unwrap();
        // Generated prop tables carry no type and stay out of the menu.
        fs::write(
            components.join("props.md"),
            "---\ntitle: Button props\n---\n",
        )
        .unwrap();
        fs::write(components.join("broken.md"), "---\ntype: [oops\n---\n").unwrap();
        fs::write(dir.path().join("index.md"), "# Welcome").unwrap();

        let index = ContentIndex::load(dir.path()).unwrap();

        assert_eq!(index.len(), 2);
        let badge = &index.pages()[0].record;
        assert_eq!(badge.title, "Badge");
        assert_eq!(badge.slug, "/components/badge");
        assert_eq!(badge.id, "/components/badge");
        assert_eq!(badge.status.as_deref(), Some("Deprecated"));

        let nav = pgn_nav::build_navigation(&index.group_by_category());
        assert_eq!(nav[0].title, "Buttons");
        assert!(!nav[0].items[0].deprecated);
        assert_eq!(nav[1].title, "Content");
        assert!(nav[1].items[0].deprecated);
    }

    #[test]
    fn test_load_uses_explicit_id_and_derived_title() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("form-control.md"),
            "---\nid: fc\ntype: component\n---\n",
        )
        .unwrap();

        let index = ContentIndex::load(dir.path()).unwrap();

        assert_eq!(index.pages()[0].record.id, "fc");
        assert_eq!(index.pages()[0].record.title, "Form Control");
    }

    #[test]
    fn test_load_missing_directory_is_empty() {
        let index = ContentIndex::load("/nonexistent/pgn/pages").unwrap();

        assert!(index.is_empty());
    }
}
