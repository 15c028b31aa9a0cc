//! Duplicate grouping for duplink.
//!
//! Given the target directories of a run, the grouper decides which
//! directories are wholly identical and which individual tracked files match
//! across otherwise different directories.
//!
//! # Grouping
//!
//! Every unordered pair of directories is placed on a worklist in
//! combinatorial order. For each pair the tracked files are compared:
//!
//! 1. If every tracked file matches, the second directory becomes a
//!    duplicate of the first and every other pair mentioning it is dropped.
//! 2. Otherwise each matching file of the second directory is associated
//!    with the first directory's copy, or with that copy's own canonical if
//!    it is already known to be a duplicate.
//!
//! ```rust,ignore
//! use duplink_analyze::{DuplicateGrouper, FsComparator};
//!
//! let tracked = vec!["pos_case.sh".to_string(), "neg_case.sh".to_string()];
//! let grouper = DuplicateGrouper::new(FsComparator::new(), &tracked);
//! let assocs = grouper.group(&target_dirs)?;
//!
//! for (duplicate, assoc) in &assocs {
//!     println!("{} -> {}", duplicate.display(), assoc.canonical.display());
//! }
//! ```

mod compare;
mod grouper;
pub mod report;
mod worklist;

pub use compare::{ContentComparator, FsComparator};
pub use grouper::{DuplicateGrouper, GroupingStats};
pub use report::{AssociationReport, CanonicalGroup};
pub use worklist::PairWorklist;

// Re-export core types
pub use duplink_core::{Association, AssociationKind, AssociationMap, DedupError};
