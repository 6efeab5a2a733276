//! # Error Module
//!
//! Error types for photo-tidy.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Per-file failures are recoverable** - the run carries on and the
//!   failure surfaces in the log

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum PhotoTidyError {
    #[error("Listing error: {0}")]
    Scan(#[from] ScanError),

    #[error("Hashing error: {0}")]
    Hash(#[from] HashError),
}

/// Errors that occur while enumerating files in a directory
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while computing a content digest
#[derive(Error, Debug)]
pub enum HashError {
    #[error("Failed to read {path} while hashing: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons the embedded-metadata tier failed to yield a capture date
#[derive(Error, Debug)]
pub enum EmbeddedError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No readable metadata container in {path}: {reason}")]
    NotAnImage { path: PathBuf, reason: String },

    #[error("No capture timestamp in {path}")]
    MissingField { path: PathBuf },

    #[error("Malformed capture timestamp {value:?} in {path}")]
    Malformed { path: PathBuf, value: String },
}

/// Reasons the external-tool tier failed to yield a capture date
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to run exiftool on {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("exiftool exited with {status} for {path}")]
    NonZeroExit { path: PathBuf, status: ExitStatus },

    #[error("exiftool produced malformed output for {path}: {reason}")]
    MalformedOutput { path: PathBuf, reason: String },

    #[error("exiftool reported no creation date for {path}")]
    MissingDate { path: PathBuf },
}

/// Errors for a single planned move; the run continues past any of these
#[derive(Error, Debug)]
pub enum MoveError {
    #[error("File already exists: {target}")]
    TargetExists { target: PathBuf },

    #[error("Failed to create directory {dir}: {source}")]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, PhotoTidyError>;
