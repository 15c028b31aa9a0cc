//! Error types for discovery and grouping.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a run before any filesystem mutation.
#[derive(Debug, Error)]
pub enum DedupError {
    /// The root directory could not be listed.
    #[error("Cannot list {path}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No target directories to compare.
    #[error("No matching directories")]
    EmptyInput,

    /// Reading tracked file content failed while grouping.
    #[error("Failed to compare {path}: {source}")]
    Comparison {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl DedupError {
    /// Create a discovery error with path context.
    pub fn discovery(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Discovery {
            path: path.into(),
            source,
        }
    }

    /// Create a comparison error with path context.
    pub fn comparison(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Comparison {
            path: path.into(),
            source,
        }
    }

    /// Whether the root listing itself was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Discovery { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
