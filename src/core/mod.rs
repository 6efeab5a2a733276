//! # Core Module
//!
//! The two photo-maintenance pipelines, plus their shared collaborators.
//!
//! ## Modules
//! - `listing` - Enumerates files in directories
//! - `hasher` - Computes whole-file content digests
//! - `duplicates` - Groups byte-identical files and reports them
//! - `date` - Resolves capture year-month with a two-tier fallback
//! - `organize` - Plans and applies year-month moves

pub mod date;
pub mod duplicates;
pub mod hasher;
pub mod listing;
pub mod organize;

// Re-export commonly used types
pub use date::{CreationDateTool, DateExtractor, DateLabel, ExifTool, TimingAccumulator};
pub use duplicates::{DuplicateGroup, GroupOutcome};
pub use hasher::ContentDigest;
pub use organize::{MoveExecutor, MovePlan, MovePlanner, MoveReport, PlannedMove};
