//! Replacement results and per-item errors.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The step of a replacement that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplaceErrorKind {
    /// The relative link target could not be computed. Nothing was deleted.
    LinkTarget,
    /// The existing duplicate could not be removed. It is left in place.
    Deletion,
    /// The duplicate was removed but the link could not be created.
    LinkCreation,
}

impl std::fmt::Display for ReplaceErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinkTarget => write!(f, "Resolve link target"),
            Self::Deletion => write!(f, "Delete"),
            Self::LinkCreation => write!(f, "Create link"),
        }
    }
}

/// A non-fatal failure for one duplicate path.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{kind} failed for {}: {message}", .path.display())]
pub struct ReplaceError {
    /// The duplicate path being replaced.
    pub path: PathBuf,
    /// Which step failed.
    pub kind: ReplaceErrorKind,
    /// A human-readable error message.
    pub message: String,
}

impl ReplaceError {
    /// Create an error for a link target that could not be computed.
    pub fn link_target(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ReplaceErrorKind::LinkTarget,
            message: message.into(),
        }
    }

    /// Create a deletion error.
    pub fn deletion(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ReplaceErrorKind::Deletion,
            message: message.into(),
        }
    }

    /// Create a link creation error.
    pub fn link_creation(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ReplaceErrorKind::LinkCreation,
            message: message.into(),
        }
    }

    /// Whether the original content at `path` is gone.
    pub fn data_lost(&self) -> bool {
        self.kind == ReplaceErrorKind::LinkCreation
    }
}

/// Result of applying an association map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceOutcome {
    /// Duplicates replaced by a fresh link.
    pub replaced: usize,
    /// Duplicates that already were the expected link.
    pub unchanged: usize,
    /// Duplicates that could not be replaced.
    pub failed: usize,
    /// Bytes of regular file content removed in favour of links.
    pub bytes_reclaimed: u64,
    /// Errors that occurred, in processing order.
    pub errors: Vec<ReplaceError>,
}

impl ReplaceOutcome {
    /// Check if every item was handled.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Paths whose content was deleted without a replacement link.
    pub fn lost_paths(&self) -> Vec<&Path> {
        self.errors
            .iter()
            .filter(|e| e.data_lost())
            .map(|e| e.path.as_path())
            .collect()
    }

    pub(crate) fn add_error(&mut self, error: ReplaceError) {
        self.failed += 1;
        self.errors.push(error);
    }

    /// Get a human-readable summary of the run.
    pub fn summary(&self) -> String {
        let reclaimed = humansize::format_size(self.bytes_reclaimed, humansize::BINARY);
        let mut text = format!("Linked {} files, reclaimed {}", self.replaced, reclaimed);
        if self.unchanged > 0 {
            text.push_str(&format!(", {} already linked", self.unchanged));
        }
        if self.failed > 0 {
            text.push_str(&format!(", {} failed", self.failed));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation_loses_data() {
        let err = ReplaceError::link_creation("/l/b/f.sh", "read-only filesystem");
        assert!(err.data_lost());
        assert_eq!(
            err.to_string(),
            "Create link failed for /l/b/f.sh: read-only filesystem"
        );

        let err = ReplaceError::deletion("/l/b/f.sh", "permission denied");
        assert!(!err.data_lost());

        let err = ReplaceError::link_target("/l/b/f.sh", "empty path");
        assert!(!err.data_lost());
        assert_eq!(
            err.to_string(),
            "Resolve link target failed for /l/b/f.sh: empty path"
        );
    }

    #[test]
    fn test_summary() {
        let mut outcome = ReplaceOutcome {
            replaced: 3,
            bytes_reclaimed: 2048,
            ..Default::default()
        };
        assert!(outcome.is_success());
        assert_eq!(outcome.summary(), "Linked 3 files, reclaimed 2 KiB");

        outcome.unchanged = 1;
        outcome.add_error(ReplaceError::link_creation("/x", "boom"));
        assert!(!outcome.is_success());
        assert_eq!(outcome.lost_paths(), vec![Path::new("/x")]);
        assert_eq!(
            outcome.summary(),
            "Linked 3 files, reclaimed 2 KiB, 1 already linked, 1 failed"
        );
    }
}
