use duplink_scan::{DedupConfig, DedupError, DirectoryLocator, locate};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_no_matching_directories_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("other")).unwrap();

    let dirs = locate(temp.path(), "lab_", "func_tests/scripts").unwrap();
    assert!(dirs.is_empty());
}

#[test]
fn test_root_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    fs::write(&file, "content").unwrap();

    let err = locate(&file, "", "").unwrap_err();
    assert!(matches!(err, DedupError::Discovery { .. }));
}

#[test]
fn test_subpath_that_is_a_file_is_skipped() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("lab_a/func_tests")).unwrap();
    fs::write(temp.path().join("lab_a/func_tests/scripts"), "oops").unwrap();
    fs::create_dir_all(temp.path().join("lab_b/func_tests/scripts")).unwrap();

    let config = DedupConfig::new(temp.path());
    let dirs = DirectoryLocator::new(&config).locate().unwrap();

    assert_eq!(dirs, vec![temp.path().join("lab_b/func_tests/scripts")]);
}

#[cfg(unix)]
#[test]
fn test_symlinked_child_directory_is_followed() {
    let temp = TempDir::new().unwrap();
    let real = temp.path().join("storage");
    fs::create_dir_all(real.join("func_tests/scripts")).unwrap();
    std::os::unix::fs::symlink(&real, temp.path().join("lab_link")).unwrap();

    let dirs = locate(temp.path(), "lab_", "func_tests/scripts").unwrap();
    assert_eq!(dirs, vec![temp.path().join("lab_link/func_tests/scripts")]);
}

#[test]
fn test_missing_relative_root() {
    let dirs = locate("./definitely-not-here-duplink", "lab_", "x");
    assert!(dirs.is_err());
}
