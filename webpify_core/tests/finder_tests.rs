//! File discovery behaviour on real directory trees

use std::path::PathBuf;
use webpify_core::{DiscoveryError, ErrorKind, find_files};
use webpify_test_utils::TestTree;

fn sorted(files: webpify_core::FileSet) -> Vec<PathBuf> {
    let mut files = files.into_vec();
    files.sort();
    files
}

#[test]
fn test_single_file_passthrough() {
    let tree = TestTree::new();
    let file = tree.file("photo.png", b"anything");

    let files = find_files(&file).unwrap();

    assert_eq!(files.into_vec(), vec![file]);
}

#[test]
fn test_directory_completeness() {
    let tree = TestTree::new();
    let a = tree.file("a.png", b"a");
    let b = tree.file("b.txt", b"b");
    let c = tree.file("nested/deeper/c.jpg", b"c");
    tree.dir("nested/empty");

    let files = find_files(tree.path()).unwrap();

    let mut expected = vec![a, b, c];
    expected.sort();
    assert_eq!(sorted(files), expected);
}

#[test]
fn test_nonexistent_path_is_not_found() {
    let tree = TestTree::new();

    let err = find_files(&tree.join("does/not/exist")).unwrap_err();

    assert!(matches!(err, DiscoveryError::Stat { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("does/not/exist"));
}

#[cfg(unix)]
mod symlinks {
    use super::*;

    #[test]
    fn test_standalone_symlink_yields_resolved_path() {
        let tree = TestTree::new();
        tree.file("real.png", b"data");
        let link = tree.symlink("link.png", tree.join("real.png"));

        let files = find_files(&link).unwrap();

        assert_eq!(files.into_vec(), vec![tree.canonical("real.png")]);
    }

    #[test]
    fn test_chained_symlink_is_followed_to_the_end() {
        let tree = TestTree::new();
        tree.file("real.png", b"data");
        tree.symlink("hop1", tree.join("real.png"));
        let link = tree.symlink("hop2", tree.join("hop1"));

        let files = find_files(&link).unwrap();

        assert_eq!(files.into_vec(), vec![tree.canonical("real.png")]);
    }

    #[test]
    fn test_standalone_symlink_to_directory_is_empty() {
        let tree = TestTree::new();
        tree.file("dir/inside.png", b"data");
        let link = tree.symlink("dir_link", tree.join("dir"));

        let files = find_files(&link).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_broken_standalone_symlink_is_stat_error() {
        let tree = TestTree::new();
        let link = tree.symlink("dangling", tree.join("gone.png"));

        let err = find_files(&link).unwrap_err();

        assert!(matches!(err, DiscoveryError::SymlinkResolution { .. }));
        assert_eq!(err.kind(), ErrorKind::Stat);
    }

    #[test]
    fn test_symlink_to_discovered_file_is_not_duplicated() {
        let tree = TestTree::new();
        tree.file("a.png", b"a");
        tree.symlink("s.png", tree.join("a.png"));
        tree.symlink("sub/also_a.png", tree.join("a.png"));

        let files = find_files(tree.path()).unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_symlinks_to_outside_file_add_resolved_path_once() {
        let outside = TestTree::new();
        outside.file("external.png", b"x");

        let tree = TestTree::new();
        let local = tree.file("local.png", b"l");
        tree.symlink("one", outside.join("external.png"));
        tree.symlink("two", outside.join("external.png"));

        let files = find_files(tree.path()).unwrap();

        let mut expected = vec![local, outside.canonical("external.png")];
        expected.sort();
        assert_eq!(sorted(files), expected);
    }

    #[test]
    fn test_symlink_to_directory_is_not_descended() {
        let outside = TestTree::new();
        outside.file("only_via_link.png", b"x");

        let tree = TestTree::new();
        let kept = tree.file("kept.png", b"k");
        tree.symlink("linked_dir", outside.path());

        let files = find_files(tree.path()).unwrap();

        assert_eq!(files.into_vec(), vec![kept]);
    }

    #[test]
    fn test_broken_and_looping_links_inside_walk_are_skipped() {
        let tree = TestTree::new();
        let kept = tree.file("kept.png", b"k");
        tree.symlink("dangling", tree.join("missing.png"));
        tree.symlink("loop_a", tree.join("loop_b"));
        tree.symlink("loop_b", tree.join("loop_a"));

        let files = find_files(tree.path()).unwrap();

        assert_eq!(files.into_vec(), vec![kept]);
    }

    #[test]
    fn test_directory_cycle_through_link_terminates() {
        let tree = TestTree::new();
        let kept = tree.file("sub/kept.png", b"k");
        tree.symlink("sub/back_to_root", tree.path());

        let files = find_files(tree.path()).unwrap();

        assert_eq!(files.into_vec(), vec![kept]);
    }
}
