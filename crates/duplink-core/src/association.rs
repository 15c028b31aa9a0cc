//! Duplicate-to-canonical associations produced by grouping.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Whether an association covers a whole directory or a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssociationKind {
    /// Every tracked file of the directory matches the canonical directory.
    Directory,
    /// A single tracked file matches.
    File,
}

/// Canonical representative recorded for a duplicate path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    /// The kept copy.
    pub canonical: PathBuf,
    /// Granularity of the association.
    pub kind: AssociationKind,
}

impl Association {
    /// Create a directory-level association.
    pub fn directory(canonical: impl Into<PathBuf>) -> Self {
        Self {
            canonical: canonical.into(),
            kind: AssociationKind::Directory,
        }
    }

    /// Create a file-level association.
    pub fn file(canonical: impl Into<PathBuf>) -> Self {
        Self {
            canonical: canonical.into(),
            kind: AssociationKind::File,
        }
    }

    /// Check if this is a directory-level association.
    pub fn is_directory(&self) -> bool {
        self.kind == AssociationKind::Directory
    }
}

/// Mapping from each duplicate path to its canonical representative.
///
/// Entries keep insertion order. Re-inserting an existing key replaces its
/// association but keeps the key's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssociationMap {
    entries: IndexMap<PathBuf, Association>,
}

impl AssociationMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `duplicate` is a copy of `association.canonical`.
    ///
    /// Returns the previous association for `duplicate`, if any.
    pub fn insert(
        &mut self,
        duplicate: impl Into<PathBuf>,
        association: Association,
    ) -> Option<Association> {
        self.entries.insert(duplicate.into(), association)
    }

    /// Look up the association recorded for a path.
    pub fn get(&self, path: &Path) -> Option<&Association> {
        self.entries.get(path)
    }

    /// Look up the canonical path recorded for a duplicate.
    pub fn canonical_of(&self, path: &Path) -> Option<&Path> {
        self.entries.get(path).map(|a| a.canonical.as_path())
    }

    /// Check whether a path is already known to be a duplicate.
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of recorded associations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no associations were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(duplicate, association)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Association)> {
        self.entries.iter().map(|(k, v)| (k.as_path(), v))
    }

    /// Unique canonical paths in order of first appearance.
    pub fn canonicals(&self) -> Vec<&Path> {
        let mut seen: Vec<&Path> = Vec::new();
        for association in self.entries.values() {
            let canonical = association.canonical.as_path();
            if !seen.contains(&canonical) {
                seen.push(canonical);
            }
        }
        seen
    }

    /// Count associations of the given kind.
    pub fn count_kind(&self, kind: AssociationKind) -> usize {
        self.entries.values().filter(|a| a.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a AssociationMap {
    type Item = (&'a PathBuf, &'a Association);
    type IntoIter = indexmap::map::Iter<'a, PathBuf, Association>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = AssociationMap::new();
        map.insert("/b/x", Association::file("/a/x"));
        map.insert("/c/x", Association::file("/a/x"));
        let previous = map.insert("/b/x", Association::file("/z/x"));

        assert_eq!(previous, Some(Association::file("/a/x")));
        let keys: Vec<_> = map.iter().map(|(k, _)| k.to_path_buf()).collect();
        assert_eq!(keys, vec![PathBuf::from("/b/x"), PathBuf::from("/c/x")]);
        assert_eq!(map.canonical_of(Path::new("/b/x")), Some(Path::new("/z/x")));
    }

    #[test]
    fn test_canonicals_first_appearance() {
        let mut map = AssociationMap::new();
        map.insert("/b", Association::directory("/a"));
        map.insert("/d/f", Association::file("/c/f"));
        map.insert("/e", Association::directory("/a"));

        assert_eq!(map.canonicals(), vec![Path::new("/a"), Path::new("/c/f")]);
        assert_eq!(map.count_kind(AssociationKind::Directory), 2);
        assert_eq!(map.count_kind(AssociationKind::File), 1);
    }
}
