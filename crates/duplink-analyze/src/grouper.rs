//! Pairwise directory grouping.
//!
//! Directory-level duplication is decided before any file-level association
//! is recorded for a pair. The first directory of a pair is always the
//! canonical side.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use duplink_core::{Association, AssociationMap, DedupError};

use crate::compare::ContentComparator;
use crate::worklist::PairWorklist;

/// Counters collected while grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupingStats {
    /// Number of target directories.
    pub directories: usize,
    /// Pairs whose tracked files were actually compared.
    pub pairs_compared: usize,
    /// Pairs never compared because a directory duplicate removed them or
    /// shifted them behind the cursor.
    pub pairs_purged: usize,
    /// Directory-level associations recorded.
    pub directory_duplicates: usize,
    /// File-level associations recorded (including overwrites).
    pub file_duplicates: usize,
}

/// Groups target directories into duplicate associations.
pub struct DuplicateGrouper<'a, C> {
    comparator: C,
    tracked_files: &'a [String],
}

impl<'a, C: ContentComparator> DuplicateGrouper<'a, C> {
    /// Create a grouper comparing `tracked_files` with `comparator`.
    pub fn new(comparator: C, tracked_files: &'a [String]) -> Self {
        Self {
            comparator,
            tracked_files,
        }
    }

    /// Compute the association map for `dirs`.
    pub fn group(&self, dirs: &[PathBuf]) -> Result<AssociationMap, DedupError> {
        self.group_with_stats(dirs).map(|(assocs, _)| assocs)
    }

    /// Compute the association map along with grouping counters.
    pub fn group_with_stats(
        &self,
        dirs: &[PathBuf],
    ) -> Result<(AssociationMap, GroupingStats), DedupError> {
        if dirs.is_empty() {
            return Err(DedupError::EmptyInput);
        }

        let mut assocs = AssociationMap::new();
        let mut stats = GroupingStats {
            directories: dirs.len(),
            ..Default::default()
        };
        let mut worklist = PairWorklist::new(dirs.len());

        while let Some((i, j)) = worklist.current() {
            let (dir1, dir2) = (&dirs[i], &dirs[j]);
            let matches = self.matching_files(dir1, dir2)?;
            stats.pairs_compared += 1;

            if matches.len() == self.tracked_files.len() {
                debug!(
                    duplicate = %dir2.display(),
                    canonical = %dir1.display(),
                    "directory duplicate"
                );
                assocs.insert(dir2.clone(), Association::directory(dir1));
                stats.directory_duplicates += 1;
                // The compared pair goes too but is not counted as purged.
                stats.pairs_purged += worklist.purge(j) - 1;
            } else {
                for name in matches {
                    let file1 = dir1.join(name);
                    let file2 = dir2.join(name);
                    let canonical = match assocs.canonical_of(&file1) {
                        Some(root) => root.to_path_buf(),
                        None => file1,
                    };
                    debug!(
                        duplicate = %file2.display(),
                        canonical = %canonical.display(),
                        "file duplicate"
                    );
                    assocs.insert(file2, Association::file(canonical));
                    stats.file_duplicates += 1;
                }
                worklist.advance();
            }
        }

        info!(
            directories = stats.directories,
            compared = stats.pairs_compared,
            purged = stats.pairs_purged,
            associations = assocs.len(),
            "grouping finished"
        );

        Ok((assocs, stats))
    }

    /// Tracked filenames present and identical in both directories.
    fn matching_files(&self, dir1: &Path, dir2: &Path) -> Result<Vec<&'a str>, DedupError> {
        let mut matches = Vec::new();
        for name in self.tracked_files {
            if self.comparator.files_equal(&dir1.join(name), &dir2.join(name))? {
                matches.push(name.as_str());
            }
        }
        Ok(matches)
    }
}
