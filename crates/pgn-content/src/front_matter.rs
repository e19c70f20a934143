//! YAML front matter extraction.
//!
//! A page may start with a block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Button
//! type: component
//! categories:
//!   - Buttons
//! status: Deprecated
//! ---
//! ```
//!
//! `categories` may also be a single string. A `status` that is not a
//! string is treated as absent. Numeric or boolean `id`, `title` and `type`
//! values are read as their text.

use serde::Deserialize;
use serde_yaml::Value;

use crate::ContentError;

/// Page attributes declared in front matter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    /// Explicit page id.
    pub id: Option<String>,
    /// Page title.
    pub title: Option<String>,
    /// Page type (e.g., "component"). Pages without a type stay out of the menu.
    pub page_type: Option<String>,
    /// Category labels in declaration order.
    pub categories: Vec<String>,
    /// Lifecycle status.
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFrontMatter {
    id: Value,
    title: Value,
    #[serde(rename = "type")]
    page_type: Value,
    categories: Value,
    status: Value,
}

impl FrontMatter {
    /// Parse front matter from the start of a page.
    ///
    /// Returns `Ok(None)` when the page has no front matter block.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is not valid YAML.
    pub fn parse(content: &str) -> Result<Option<Self>, ContentError> {
        let Some(block) = extract_block(content) else {
            return Ok(None);
        };

        let trimmed = block.trim();
        if trimmed.is_empty() {
            return Ok(Some(Self::default()));
        }

        let raw: RawFrontMatter =
            serde_yaml::from_str(trimmed).map_err(|e| ContentError::FrontMatter(e.to_string()))?;

        Ok(Some(Self {
            id: scalar_text(raw.id),
            title: scalar_text(raw.title),
            page_type: scalar_text(raw.page_type),
            categories: string_list(raw.categories),
            status: match raw.status {
                Value::String(s) => Some(s),
                _ => None,
            },
        }))
    }
}

/// Return the YAML between the opening and closing `---` lines.
fn extract_block(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_list(value: Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s],
        Value::Sequence(seq) => seq
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
