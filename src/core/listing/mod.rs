//! # Listing Module
//!
//! Enumerates the regular files a run will consider. The default is a
//! single-level listing of the given directory; recursive traversal walks
//! the whole tree.
//!
//! Files are returned in sorted order so runs are deterministic.

use crate::error::ScanError;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the regular files inside `dir`.
pub fn list_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = if recursive {
        list_recursive(dir)
    } else {
        list_one_level(dir)?
    };
    files.sort();
    Ok(files)
}

fn list_one_level(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read_err = |source| ScanError::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.file_type().map_err(read_err)?.is_file() {
            files.push(entry.path());
        }
    }
    Ok(files)
}

fn list_recursive(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}
