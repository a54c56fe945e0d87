#![cfg(unix)]

use cpdir::{
    CopyOptions, CpdirError, OtherKind, SpecialFilePolicy, copy_dir_contents,
    copy_dir_contents_with,
};
use std::fs;
use std::os::unix::fs::symlink;
use std::os::unix::net::UnixListener;
use std::path::Path;
use tempfile::tempdir;

fn opts(special_files: SpecialFilePolicy) -> CopyOptions {
    CopyOptions {
        special_files,
        ..CopyOptions::default()
    }
}

/// real/data.txt, real/nested/n.txt, link_file -> real/data.txt, link_dir -> real/nested
fn build_links(src: &Path) {
    fs::create_dir_all(src.join("real/nested")).unwrap();
    fs::write(src.join("real/data.txt"), b"data").unwrap();
    fs::write(src.join("real/nested/n.txt"), b"n").unwrap();
    symlink(src.join("real/data.txt"), src.join("link_file")).unwrap();
    symlink(src.join("real/nested"), src.join("link_dir")).unwrap();
}

#[test]
fn skip_leaves_links_out() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    build_links(src.path());

    let report = copy_dir_contents(src.path(), dest.path()).unwrap();

    assert_eq!(report.skipped, 2);
    assert_eq!(report.files_copied, 2);
    assert!(fs::symlink_metadata(dest.path().join("link_file")).is_err());
    assert!(fs::symlink_metadata(dest.path().join("link_dir")).is_err());
    assert_eq!(fs::read(dest.path().join("real/data.txt")).unwrap(), b"data");
}

#[test]
fn reject_fails_on_first_link() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    build_links(src.path());

    let err = copy_dir_contents_with(src.path(), dest.path(), &opts(SpecialFilePolicy::Reject))
        .unwrap_err();
    match err {
        CpdirError::SpecialFile { kind, .. } => assert_eq!(kind, OtherKind::Symlink),
        other => panic!("expected SpecialFile, got {other:?}"),
    }
}

#[test]
fn follow_copies_link_targets_as_plain_entries() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    build_links(src.path());

    let report =
        copy_dir_contents_with(src.path(), dest.path(), &opts(SpecialFilePolicy::Follow)).unwrap();

    let copied_link = dest.path().join("link_file");
    let meta = fs::symlink_metadata(&copied_link).unwrap();
    assert!(meta.file_type().is_file(), "link must become a regular file");
    assert_eq!(fs::read(&copied_link).unwrap(), b"data");

    let copied_dir = dest.path().join("link_dir");
    assert!(fs::symlink_metadata(&copied_dir).unwrap().file_type().is_dir());
    assert_eq!(fs::read(copied_dir.join("n.txt")).unwrap(), b"n");
    assert_eq!(report.skipped, 0);
}

#[test]
fn broken_link_under_follow_is_a_walk_error() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    symlink(src.path().join("gone"), src.path().join("dangling")).unwrap();

    let err = copy_dir_contents_with(src.path(), dest.path(), &opts(SpecialFilePolicy::Follow))
        .unwrap_err();
    assert_eq!(err.code(), "walk_error");
}

#[test]
fn sockets_are_never_opened() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    fs::write(src.path().join("plain"), b"p").unwrap();
    let _listener = UnixListener::bind(src.path().join("sock")).unwrap();

    for policy in [SpecialFilePolicy::Skip, SpecialFilePolicy::Follow] {
        let report = copy_dir_contents_with(src.path(), dest.path(), &opts(policy)).unwrap();
        assert_eq!(report.skipped, 1, "policy {policy}");
        assert!(!dest.path().join("sock").exists());
    }

    let err = copy_dir_contents_with(src.path(), dest.path(), &opts(SpecialFilePolicy::Reject))
        .unwrap_err();
    assert!(matches!(
        err,
        CpdirError::SpecialFile {
            kind: OtherKind::Socket,
            ..
        }
    ));
}
