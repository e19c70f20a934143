//! Content records and category groups.
//!
//! Records are produced by a content source and are read-only afterwards.
//! Groups bucket records under a category label in the order the content
//! source established.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A single documented page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Unique page identifier.
    pub id: String,
    /// Route to the page (e.g., "/components/button").
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Category tags in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Lifecycle status (e.g., "Stable", "Deprecated").
    ///
    /// A value that is not a string deserializes as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusField {
    Text(String),
    Other(#[allow(dead_code)] serde::de::IgnoredAny),
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StatusField::deserialize(deserializer)? {
        StatusField::Text(status) => Some(status),
        StatusField::Other(_) => None,
    })
}

impl ContentRecord {
    /// Create a record without categories or status.
    pub fn new(id: impl Into<String>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            categories: Vec::new(),
            status: None,
        }
    }

    /// Set the lifecycle status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the category tags.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }
}

/// Records sharing a category label.
///
/// Items keep the order they were given in. A record id appears at most once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// Category label, used as the section title.
    pub label: String,
    /// Records in this category.
    pub items: Vec<ContentRecord>,
}

impl CategoryGroup {
    /// Create a group, dropping later records whose id was already seen.
    pub fn new(label: impl Into<String>, items: Vec<ContentRecord>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        let items = items
            .into_iter()
            .filter(|record| seen.insert(record.id.clone()))
            .collect();

        Self {
            label: label.into(),
            items,
        }
    }

    /// Number of records in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
