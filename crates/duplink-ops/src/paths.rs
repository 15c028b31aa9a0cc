//! Relative link target computation.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Compute the target to store in a symlink at `link` so that it resolves to
/// `canonical`.
///
/// Both paths are made absolute against the current directory and normalised
/// lexically; symlinks along the way are not resolved.
pub fn relative_link_target(canonical: &Path, link: &Path) -> io::Result<PathBuf> {
    let canonical = normalize(&std::path::absolute(canonical)?);
    let link = normalize(&std::path::absolute(link)?);
    let base = link.parent().unwrap_or(Path::new("/"));

    let target: Vec<Component> = canonical.components().collect();
    let from: Vec<Component> = base.components().collect();

    // Different prefixes (Windows drives) cannot be expressed relatively.
    if target.first() != from.first() {
        return Ok(canonical);
    }

    let common = target
        .iter()
        .zip(from.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Ok(relative)
}

/// Drop `.` components and fold `..` into their parent.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_directories() {
        let target = relative_link_target(
            Path::new("/labs/lab_01/func_tests/scripts/pos_case.sh"),
            Path::new("/labs/lab_02/func_tests/scripts/pos_case.sh"),
        )
        .unwrap();

        assert_eq!(
            target,
            PathBuf::from("../../../lab_01/func_tests/scripts/pos_case.sh")
        );
    }

    #[test]
    fn test_same_directory() {
        let target = relative_link_target(Path::new("/a/b/x"), Path::new("/a/b/y")).unwrap();
        assert_eq!(target, PathBuf::from("x"));
    }

    #[test]
    fn test_dot_components_are_folded() {
        let target =
            relative_link_target(Path::new("/a/./b/../c/x"), Path::new("/a/d/./y")).unwrap();
        assert_eq!(target, PathBuf::from("../c/x"));
    }

    #[test]
    fn test_relative_inputs_share_the_current_directory() {
        let target =
            relative_link_target(Path::new("./lab_01/s/f"), Path::new("lab_02/s/f")).unwrap();
        assert_eq!(target, PathBuf::from("../../lab_01/s/f"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
    }
}
