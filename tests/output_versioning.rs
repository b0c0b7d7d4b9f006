//! Versioned output behavior: slug directories, monotonically increasing
//! version suffixes, no overwrites.

use std::fs;

use account_brief::output::{slugify, write_brief};
use tempfile::tempdir;

#[test]
fn three_writes_yield_v1_v2_v3() {
    let root = tempdir().expect("tempdir");

    let p1 = write_brief(root.path(), "Acme Corp", "first").expect("write v1");
    let p2 = write_brief(root.path(), "Acme Corp", "second").expect("write v2");
    let p3 = write_brief(root.path(), "Acme Corp", "third").expect("write v3");

    assert!(p1.ends_with("acme-corp/acme-corp-v1.md"));
    assert!(p2.ends_with("acme-corp/acme-corp-v2.md"));
    assert!(p3.ends_with("acme-corp/acme-corp-v3.md"));

    // Nothing overwritten: all three files exist with their own contents.
    assert_eq!(fs::read_to_string(&p1).unwrap(), "first");
    assert_eq!(fs::read_to_string(&p2).unwrap(), "second");
    assert_eq!(fs::read_to_string(&p3).unwrap(), "third");
}

#[test]
fn version_scan_uses_max_plus_one_not_file_count() {
    let root = tempdir().expect("tempdir");
    let dir = root.path().join("acme");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("acme-v1.md"), "old").unwrap();
    fs::write(dir.join("acme-v7.md"), "old").unwrap();

    let path = write_brief(root.path(), "Acme", "new").expect("write");
    assert!(path.ends_with("acme/acme-v8.md"));
}

#[test]
fn unrelated_files_do_not_affect_versioning() {
    let root = tempdir().expect("tempdir");
    let dir = root.path().join("acme");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("notes.txt"), "x").unwrap();
    fs::write(dir.join("other-co-v9.md"), "x").unwrap();
    fs::write(dir.join("acme-vX.md"), "x").unwrap();

    let path = write_brief(root.path(), "Acme", "new").expect("write");
    assert!(path.ends_with("acme/acme-v1.md"));
}

#[test]
fn separate_companies_version_independently() {
    let root = tempdir().expect("tempdir");

    let a1 = write_brief(root.path(), "Acme Corp", "a").unwrap();
    let b1 = write_brief(root.path(), "TechStart Inc", "b").unwrap();
    let a2 = write_brief(root.path(), "Acme Corp", "a2").unwrap();

    assert!(a1.ends_with("acme-corp/acme-corp-v1.md"));
    assert!(b1.ends_with("techstart-inc/techstart-inc-v1.md"));
    assert!(a2.ends_with("acme-corp/acme-corp-v2.md"));
}

#[test]
fn slug_matches_directory_naming() {
    assert_eq!(slugify("Acme Corp"), "acme-corp");

    let root = tempdir().expect("tempdir");
    let path = write_brief(root.path(), "Acme Corp", "body").unwrap();
    assert!(path.parent().unwrap().ends_with("acme-corp"));
}
