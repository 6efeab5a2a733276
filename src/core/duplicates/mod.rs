//! # Duplicates Module
//!
//! Groups files by content digest and reports groups with more than one
//! member. No files are modified or deleted; duplicates surface only in
//! the log and the returned groups.

use crate::core::hasher::{self, ContentDigest};
use crate::error::HashError;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Files sharing one content digest, in discovery order
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    pub digest: ContentDigest,
    pub members: Vec<PathBuf>,
}

/// Result of a grouping run
///
/// Files that could not be read are excluded from grouping and collected
/// in `errors`; the run itself never aborts on a single unreadable file.
#[derive(Debug, Default)]
pub struct GroupOutcome {
    pub groups: Vec<DuplicateGroup>,
    pub errors: Vec<HashError>,
}

/// Hash every file and report the groups of byte-identical ones.
///
/// Emits one warning per duplicate group listing all member paths.
pub fn group_by_digest(files: &[PathBuf]) -> GroupOutcome {
    let mut members: HashMap<ContentDigest, Vec<PathBuf>> = HashMap::new();
    let mut discovery: Vec<ContentDigest> = Vec::new();
    let mut errors = Vec::new();

    for file in files {
        match hasher::hash_file(file) {
            Ok(digest) => {
                debug!("{} -- {}", file.display(), digest);
                let entry = members.entry(digest.clone()).or_default();
                if entry.is_empty() {
                    discovery.push(digest);
                }
                entry.push(file.clone());
            }
            Err(err) => {
                warn!("{err}");
                errors.push(err);
            }
        }
    }

    let mut groups = Vec::new();
    for digest in discovery {
        if let Some(paths) = members.remove(&digest) {
            if paths.len() > 1 {
                warn!("duplicate found for {paths:?}");
                groups.push(DuplicateGroup {
                    digest,
                    members: paths,
                });
            }
        }
    }

    GroupOutcome { groups, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn identical_pair_forms_one_group() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.jpg", b"holiday");
        let b = write_file(&dir, "b.jpg", b"holiday");
        let c = write_file(&dir, "c.jpg", b"birthday");

        let outcome = group_by_digest(&[a.clone(), b.clone(), c]);

        assert_eq!(outcome.groups.len(), 1);
        assert_eq!(outcome.groups[0].members, vec![a, b]);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn unique_files_form_no_groups() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.jpg", b"one");
        let b = write_file(&dir, "b.jpg", b"two");

        let outcome = group_by_digest(&[a, b]);
        assert!(outcome.groups.is_empty());
    }

    #[test]
    fn unreadable_file_is_collected_not_fatal() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.jpg", b"holiday");
        let b = write_file(&dir, "b.jpg", b"holiday");
        let missing = dir.path().join("gone.jpg");

        let outcome = group_by_digest(&[a.clone(), missing, b.clone()]);

        assert_eq!(outcome.groups.len(), 1);
        assert_eq!(outcome.groups[0].members, vec![a, b]);
        assert_eq!(outcome.errors.len(), 1);
    }

    #[test]
    fn discovery_order_preserved_within_group() {
        let dir = TempDir::new().unwrap();
        let z = write_file(&dir, "z.jpg", b"same");
        let a = write_file(&dir, "a.jpg", b"same");

        let outcome = group_by_digest(&[z.clone(), a.clone()]);
        assert_eq!(outcome.groups[0].members, vec![z, a]);
    }
}
