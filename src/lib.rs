//! # photo-tidy
//!
//! Finds duplicate photos by content hash and files photos into
//! year-month folders based on capture-date metadata.
//!
//! ## Core Philosophy
//! - **Never overwrite** - a name collision leaves the file where it is
//! - **Report, don't delete** - duplicates are only ever listed
//! - **Keep going** - per-file failures are logged, not fatal
//!
//! ## Architecture
//! - `core` - The duplicate-finding and organizing pipelines
//! - `error` - Error types
//! - `cli` - Command-line interface (lives in the binary)

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{PhotoTidyError, Result};

use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

/// Initialize tracing for the application.
///
/// Without a log file, records go to stderr. With one, records go to that
/// file instead (ANSI-free, info threshold unless `RUST_LOG` overrides it);
/// the returned guard must be held for the life of the run so buffered
/// records are flushed.
pub fn init_tracing(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let name = path
                .file_name()
                .unwrap_or_else(|| OsStr::new("photo-tidy.log"));
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}
