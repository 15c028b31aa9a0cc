//! Association report grouped by canonical path.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use duplink_core::{AssociationKind, AssociationMap};

/// All duplicates sharing one canonical representative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalGroup {
    /// The kept copy.
    pub canonical: PathBuf,
    /// Whether the group is made of directories or files.
    pub kind: AssociationKind,
    /// Duplicates pointing at `canonical`, sorted.
    pub duplicates: Vec<PathBuf>,
}

impl CanonicalGroup {
    /// Label used when printing the group header.
    pub fn label(&self) -> &'static str {
        match self.kind {
            AssociationKind::Directory => "folders",
            AssociationKind::File => "files",
        }
    }
}

/// Read-only view of an association map for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssociationReport {
    /// Groups in order of first appearance of their canonical path.
    pub groups: Vec<CanonicalGroup>,
}

impl AssociationReport {
    /// Build the report from an association map.
    pub fn from_map(assocs: &AssociationMap) -> Self {
        let groups = assocs
            .canonicals()
            .into_iter()
            .filter_map(|canonical| {
                let members: Vec<_> = assocs
                    .iter()
                    .filter(|(_, a)| a.canonical == canonical)
                    .collect();
                let kind = members.first()?.1.kind;
                let mut duplicates: Vec<PathBuf> =
                    members.iter().map(|(dup, _)| dup.to_path_buf()).collect();
                duplicates.sort();
                Some(CanonicalGroup {
                    canonical: canonical.to_path_buf(),
                    kind,
                    duplicates,
                })
            })
            .collect();

        Self { groups }
    }

    /// Check if there is nothing to report.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for AssociationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "associations: ")?;
        for group in &self.groups {
            writeln!(f, "{} equal to {}:", group.label(), group.canonical.display())?;
            for duplicate in &group.duplicates {
                writeln!(f, "{}", duplicate.display())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duplink_core::Association;

    #[test]
    fn test_groups_in_first_appearance_order() {
        let mut assocs = AssociationMap::new();
        assocs.insert("/l/c/s", Association::directory("/l/a/s"));
        assocs.insert("/l/d/s/f.sh", Association::file("/l/b/s/f.sh"));
        assocs.insert("/l/b/s", Association::directory("/l/a/s"));

        let report = AssociationReport::from_map(&assocs);

        assert_eq!(report.groups.len(), 2);
        assert_eq!(report.groups[0].canonical, PathBuf::from("/l/a/s"));
        assert_eq!(
            report.groups[0].duplicates,
            vec![PathBuf::from("/l/b/s"), PathBuf::from("/l/c/s")]
        );
        assert_eq!(report.groups[1].label(), "files");
    }

    #[test]
    fn test_display() {
        let mut assocs = AssociationMap::new();
        assocs.insert("/l/b/s", Association::directory("/l/a/s"));
        assocs.insert("/l/c/s/f.sh", Association::file("/l/a/s/f.sh"));

        let text = AssociationReport::from_map(&assocs).to_string();

        assert_eq!(
            text,
            "associations: \n\
             folders equal to /l/a/s:\n/l/b/s\n\n\
             files equal to /l/a/s/f.sh:\n/l/c/s/f.sh\n\n"
        );
    }

    #[test]
    fn test_json_shape() {
        let mut assocs = AssociationMap::new();
        assocs.insert("/l/b/s", Association::directory("/l/a/s"));

        let value = serde_json::to_value(AssociationReport::from_map(&assocs)).unwrap();
        let group = &value["groups"][0];
        assert_eq!(group["canonical"], "/l/a/s");
        assert_eq!(group["kind"], "directory");
        assert_eq!(group["duplicates"][0], "/l/b/s");
    }

    #[test]
    fn test_empty_report() {
        let report = AssociationReport::from_map(&AssociationMap::new());
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "associations: \n");
    }
}
