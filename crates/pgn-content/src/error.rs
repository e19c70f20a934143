//! Content loading errors.

use std::path::PathBuf;

/// Error type for content index operations.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Failed to read a file or directory.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Front matter block is present but not valid YAML.
    #[error("Invalid front matter: {0}")]
    FrontMatter(String),
}
