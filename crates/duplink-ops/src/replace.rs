//! Duplicate-to-symlink replacement.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, error, info, warn};

use duplink_core::{AssociationKind, AssociationMap, DedupConfig};

use crate::outcome::{ReplaceError, ReplaceOutcome};
use crate::paths::relative_link_target;

/// Replaces duplicates with relative symbolic links to their canonical copy.
///
/// There is no rollback: each path is handled on its own, and a failure is
/// recorded in the outcome before moving on to the next one.
pub struct LinkReplacer<'a> {
    config: &'a DedupConfig,
}

impl<'a> LinkReplacer<'a> {
    /// Create a replacer; directory associations expand to the tracked files
    /// of `config`.
    pub fn new(config: &'a DedupConfig) -> Self {
        Self { config }
    }

    /// Apply every association in map order.
    pub fn apply(&self, assocs: &AssociationMap) -> ReplaceOutcome {
        let mut outcome = ReplaceOutcome::default();

        for (duplicate, association) in assocs.iter() {
            match association.kind {
                AssociationKind::Directory => {
                    let links = self.config.tracked_paths(duplicate);
                    let canonicals = self.config.tracked_paths(&association.canonical);
                    for (link, canonical) in links.zip(canonicals) {
                        self.replace_file(&link, &canonical, &mut outcome);
                    }
                }
                AssociationKind::File => {
                    self.replace_file(duplicate, &association.canonical, &mut outcome);
                }
            }
        }

        info!(
            replaced = outcome.replaced,
            unchanged = outcome.unchanged,
            failed = outcome.failed,
            "replacement finished"
        );
        outcome
    }

    /// Replace a single file with a link to `canonical`.
    fn replace_file(&self, path: &Path, canonical: &Path, outcome: &mut ReplaceOutcome) {
        let target = match relative_link_target(canonical, path) {
            Ok(t) => t,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot compute link target");
                outcome.add_error(ReplaceError::link_target(path, e.to_string()));
                return;
            }
        };

        let reclaimed = match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                if fs::read_link(path).is_ok_and(|current| current == target) {
                    debug!(path = %path.display(), "already linked");
                    outcome.unchanged += 1;
                    return;
                }
                0
            }
            Ok(meta) if meta.is_file() => meta.len(),
            Ok(_) => {
                warn!(path = %path.display(), "not a regular file, skipping");
                outcome.add_error(ReplaceError::deletion(path, "Not a regular file or symlink"));
                return;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot inspect duplicate");
                outcome.add_error(ReplaceError::deletion(path, e.to_string()));
                return;
            }
        };

        if let Err(e) = remove_existing(path) {
            warn!(path = %path.display(), error = %e, "failed to delete duplicate");
            outcome.add_error(ReplaceError::deletion(path, e.to_string()));
            return;
        }

        info!("Creating link {} -> {}", canonical.display(), path.display());
        if let Err(e) = create_symlink(&target, path) {
            error!(
                path = %path.display(),
                error = %e,
                "failed to create symbolic link, the file content is lost"
            );
            outcome.add_error(ReplaceError::link_creation(
                path,
                format!("{e}; the file content is lost"),
            ));
            return;
        }

        outcome.replaced += 1;
        outcome.bytes_reclaimed += reclaimed;
    }
}

/// Remove a file or symlink, treating an already missing path as removed.
fn remove_existing(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
fn create_symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}
