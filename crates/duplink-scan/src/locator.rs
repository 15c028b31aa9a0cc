//! Candidate directory enumeration.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use duplink_core::{DedupConfig, DedupError};

/// Finds the target directories for a run.
pub struct DirectoryLocator<'a> {
    config: &'a DedupConfig,
}

impl<'a> DirectoryLocator<'a> {
    /// Create a locator over the given configuration.
    pub fn new(config: &'a DedupConfig) -> Self {
        Self { config }
    }

    /// Enumerate target directories, sorted by child name.
    ///
    /// Children missing the configured subpath are skipped. Fails only when
    /// the root itself cannot be listed.
    pub fn locate(&self) -> Result<Vec<PathBuf>, DedupError> {
        let root = &self.config.root;
        let children = self.matching_children(root)?;

        let targets: Vec<PathBuf> = children
            .iter()
            .map(|name| self.config.target_dir(name))
            .filter(|target| {
                let keep = target.is_dir();
                if !keep {
                    debug!(path = %target.display(), "skipping child without subpath");
                }
                keep
            })
            .collect();

        debug!(
            root = %root.display(),
            children = children.len(),
            targets = targets.len(),
            "located target directories"
        );

        Ok(targets)
    }

    /// Sorted names of child directories passing the prefix filter.
    fn matching_children(&self, root: &Path) -> Result<Vec<String>, DedupError> {
        let entries = fs::read_dir(root).map_err(|e| DedupError::discovery(root, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    warn!(root = %root.display(), error = %err, "unreadable directory entry");
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.config.matches_prefix(&name) {
                continue;
            }

            // Follow symlinks: a linked child directory still counts.
            if entry.path().is_dir() {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }
}

/// Enumerate target directories under `root`.
///
/// Convenience wrapper for callers that do not hold a full [`DedupConfig`].
pub fn locate(
    root: impl Into<PathBuf>,
    prefix: &str,
    subpath: impl Into<PathBuf>,
) -> Result<Vec<PathBuf>, DedupError> {
    let config = DedupConfig {
        root: root.into(),
        prefix: prefix.to_string(),
        subpath: subpath.into(),
        ..DedupConfig::default()
    };
    DirectoryLocator::new(&config).locate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_labs() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        for name in ["lab_02", "lab_01", "lab_03"] {
            fs::create_dir_all(root.join(name).join("func_tests/scripts")).unwrap();
        }
        // Matching prefix but no subpath
        fs::create_dir(root.join("lab_04")).unwrap();
        // Non-matching prefix
        fs::create_dir_all(root.join("notes/func_tests/scripts")).unwrap();
        // A file with the prefix is not a directory
        fs::write(root.join("lab_05"), "not a dir").unwrap();

        temp
    }

    #[test]
    fn test_locate_sorted_and_filtered() {
        let temp = create_labs();
        let config = DedupConfig::new(temp.path());

        let dirs = DirectoryLocator::new(&config).locate().unwrap();

        assert_eq!(
            dirs,
            vec![
                temp.path().join("lab_01/func_tests/scripts"),
                temp.path().join("lab_02/func_tests/scripts"),
                temp.path().join("lab_03/func_tests/scripts"),
            ]
        );
    }

    #[test]
    fn test_locate_empty_prefix() {
        let temp = create_labs();
        let dirs = locate(temp.path(), "", "func_tests/scripts").unwrap();

        assert_eq!(dirs.len(), 4);
        assert_eq!(dirs[3], temp.path().join("notes/func_tests/scripts"));
    }

    #[test]
    fn test_locate_empty_subpath() {
        let temp = create_labs();
        let dirs = locate(temp.path(), "lab_", "").unwrap();

        assert_eq!(dirs.len(), 4);
        assert_eq!(dirs[0], temp.path().join("lab_01"));
        assert_eq!(dirs[3], temp.path().join("lab_04"));
    }

    #[test]
    fn test_locate_missing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = locate(&missing, "lab_", "func_tests/scripts").unwrap_err();
        assert!(err.is_not_found());
    }
}
