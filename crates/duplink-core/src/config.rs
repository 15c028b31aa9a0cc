//! Run configuration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default directory whose children are inspected.
pub const DEFAULT_ROOT: &str = ".";

/// Default name prefix of the inspected children.
pub const DEFAULT_PREFIX: &str = "lab_";

/// Default subpath joined onto every matching child.
pub const DEFAULT_SUBPATH: &str = "func_tests/scripts";

/// Default tracked filenames.
pub const DEFAULT_TRACKED_FILES: [&str; 4] =
    ["pos_case.sh", "neg_case.sh", "func_tests.sh", "comparator.sh"];

/// Configuration for a deduplication run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct DedupConfig {
    /// Directory whose immediate children are candidates.
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    pub root: PathBuf,

    /// Only children whose name starts with this prefix are considered.
    /// An empty prefix matches every child.
    #[builder(default = "DEFAULT_PREFIX.to_string()")]
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Relative path inside each child holding the tracked files.
    /// May be empty.
    #[builder(default = "PathBuf::from(DEFAULT_SUBPATH)")]
    #[serde(default = "default_subpath")]
    pub subpath: PathBuf,

    /// Ordered list of filenames compared in every target directory.
    #[builder(default = "default_tracked_files()")]
    #[serde(default = "default_tracked_files")]
    pub tracked_files: Vec<String>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_subpath() -> PathBuf {
    PathBuf::from(DEFAULT_SUBPATH)
}

fn default_tracked_files() -> Vec<String> {
    DEFAULT_TRACKED_FILES.iter().map(|s| s.to_string()).collect()
}

impl DedupConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        }
        if let Some(ref subpath) = self.subpath {
            if subpath.is_absolute() {
                return Err(format!(
                    "Subpath must be relative: {}",
                    subpath.display()
                ));
            }
        }
        if let Some(ref files) = self.tracked_files {
            validate_tracked_files(files)?;
        }
        Ok(())
    }
}

fn validate_tracked_files(files: &[String]) -> Result<(), String> {
    if files.is_empty() {
        return Err("At least one tracked file is required".to_string());
    }

    let mut seen = HashSet::new();
    for name in files {
        if name.is_empty() {
            return Err("Tracked file names cannot be empty".to_string());
        }
        if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
            return Err(format!("Tracked file name contains a separator: {name}"));
        }
        if name == "." || name == ".." {
            return Err(format!("Invalid tracked file name: {name}"));
        }
        if !seen.insert(name.as_str()) {
            return Err(format!("Duplicate tracked file name: {name}"));
        }
    }
    Ok(())
}

impl DedupConfig {
    /// Create a new config builder.
    pub fn builder() -> DedupConfigBuilder {
        DedupConfigBuilder::default()
    }

    /// Create a config with default prefix, subpath and tracked files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            prefix: default_prefix(),
            subpath: default_subpath(),
            tracked_files: default_tracked_files(),
        }
    }

    /// Check whether a directory entry name passes the prefix filter.
    pub fn matches_prefix(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
    }

    /// Build the target directory path for a matching child.
    pub fn target_dir(&self, child: &str) -> PathBuf {
        let dir = self.root.join(child);
        if self.subpath.as_os_str().is_empty() {
            dir
        } else {
            dir.join(&self.subpath)
        }
    }

    /// Iterate over `dir/<tracked>` for every tracked file.
    pub fn tracked_paths<'a>(&'a self, dir: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        self.tracked_files.iter().map(move |name| dir.join(name))
    }
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}
