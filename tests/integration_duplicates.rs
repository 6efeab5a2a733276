//! Integration tests for the duplicate-finding pipeline.
//!
//! These tests verify end-to-end listing + grouping behavior:
//! - byte-identical files land in one group
//! - distinct files are never reported
//! - unreadable files do not abort the run

use photo_tidy::core::{duplicates, listing};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(path: &Path, contents: &[u8]) {
    let mut file = File::create(path).unwrap();
    file.write_all(contents).unwrap();
}

#[test]
fn identical_pair_reported_once() {
    let dir = TempDir::new().unwrap();
    write_file(&dir.path().join("photo1.jpg"), b"beach sunset");
    write_file(&dir.path().join("photo2.jpg"), b"beach sunset");
    write_file(&dir.path().join("photo3.jpg"), b"mountain sunrise");

    let files = listing::list_files(dir.path(), false).unwrap();
    let outcome = duplicates::group_by_digest(&files);

    assert_eq!(outcome.groups.len(), 1);
    let members: Vec<_> = outcome.groups[0]
        .members
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(members, vec!["photo1.jpg", "photo2.jpg"]);
}

#[test]
fn empty_directory_has_no_duplicates() {
    let dir = TempDir::new().unwrap();
    let files = listing::list_files(dir.path(), false).unwrap();
    let outcome = duplicates::group_by_digest(&files);

    assert!(outcome.groups.is_empty());
    assert!(outcome.errors.is_empty());
}

#[test]
fn duplicates_found_across_directories() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    write_file(&dir_a.path().join("kept.jpg"), b"same pixels");
    write_file(&dir_b.path().join("copied.jpg"), b"same pixels");

    let mut files = listing::list_files(dir_a.path(), false).unwrap();
    files.extend(listing::list_files(dir_b.path(), false).unwrap());

    let outcome = duplicates::group_by_digest(&files);
    assert_eq!(outcome.groups.len(), 1);
    assert_eq!(outcome.groups[0].members.len(), 2);
}

#[test]
fn vanished_file_does_not_abort_grouping() {
    let dir = TempDir::new().unwrap();
    write_file(&dir.path().join("a.jpg"), b"twin");
    write_file(&dir.path().join("b.jpg"), b"twin");

    // A file that disappears between listing and hashing
    let mut files = listing::list_files(dir.path(), false).unwrap();
    files.push(PathBuf::from(dir.path().join("vanished.jpg")));

    let outcome = duplicates::group_by_digest(&files);
    assert_eq!(outcome.groups.len(), 1);
    assert_eq!(outcome.errors.len(), 1);
}

#[test]
fn one_level_listing_ignores_nested_duplicates() {
    let dir = TempDir::new().unwrap();
    write_file(&dir.path().join("top.jpg"), b"same pixels");
    fs::create_dir(dir.path().join("nested")).unwrap();
    write_file(&dir.path().join("nested").join("copy.jpg"), b"same pixels");

    let files = listing::list_files(dir.path(), false).unwrap();
    let outcome = duplicates::group_by_digest(&files);
    assert!(outcome.groups.is_empty());

    let files = listing::list_files(dir.path(), true).unwrap();
    let outcome = duplicates::group_by_digest(&files);
    assert_eq!(outcome.groups.len(), 1);
}
