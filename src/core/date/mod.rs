//! # Date Module
//!
//! Resolves the capture year-month of a file with a two-tier strategy:
//!
//! 1. **Embedded metadata** - read the EXIF capture timestamp straight
//!    from the file. Works for standard image formats only, but it is fast.
//! 2. **External tool** - ask `exiftool` for a creation date. Covers far
//!    more file types (including video), at the cost of a process spawn
//!    per file.
//!
//! The cheap tier always runs first and short-circuits the expensive one.
//! Wall-clock time spent in each tier is charged to a [`TimingAccumulator`]
//! whether or not the tier succeeds, so a run can report where its time
//! went.

mod exiftool;

pub use exiftool::{CreationDateTool, ExifTool};

use crate::error::EmbeddedError;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// A capture year-month as the 6-digit string "YYYYMM"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateLabel(String);

impl DateLabel {
    /// Accept exactly six ASCII digits, e.g. "202305".
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }

    /// Build a label from an EXIF "YYYY:MM:DD HH:MM:SS" timestamp by
    /// slicing out the year and month positions.
    pub fn from_exif_timestamp(timestamp: &str) -> Option<Self> {
        let year = timestamp.get(0..4)?;
        let month = timestamp.get(5..7)?;
        Self::parse(&format!("{year}{month}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Time spent in each extraction tier, summed across all files of a run
#[derive(Debug, Default, Clone, Copy)]
pub struct TimingAccumulator {
    pub embedded: Duration,
    pub external: Duration,
}

impl TimingAccumulator {
    pub fn merge(&mut self, other: TimingAccumulator) {
        self.embedded += other.embedded;
        self.external += other.external;
    }
}

/// Two-tier capture-date extractor
///
/// The external tool is injected so tests can substitute a fake without
/// spawning processes.
pub struct DateExtractor<T> {
    tool: T,
}

impl<T: CreationDateTool> DateExtractor<T> {
    pub fn new(tool: T) -> Self {
        Self { tool }
    }

    /// The injected external tool.
    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Resolve the capture year-month for one file, or `None` when both
    /// tiers fail. Tier failures are logged at info and never abort the run.
    pub fn extract(&self, path: &Path, timing: &mut TimingAccumulator) -> Option<DateLabel> {
        let start = Instant::now();
        let embedded = read_embedded_label(path);
        timing.embedded += start.elapsed();

        match embedded {
            Ok(label) => return Some(label),
            Err(err) => info!("{err}"),
        }

        let start = Instant::now();
        let external = self.tool.creation_date(path);
        timing.external += start.elapsed();

        match external {
            Ok(label) => Some(label),
            Err(err) => {
                info!("{err}");
                None
            }
        }
    }
}

/// Tier 1: read the EXIF capture timestamp embedded in the file.
fn read_embedded_label(path: &Path) -> Result<DateLabel, EmbeddedError> {
    let file = File::open(path).map_err(|source| EmbeddedError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new()
        .read_from_container(&mut reader)
        .map_err(|err| EmbeddedError::NotAnImage {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    let field = exif
        .get_field(exif::Tag::DateTimeOriginal, exif::In::PRIMARY)
        .ok_or_else(|| EmbeddedError::MissingField {
            path: path.to_path_buf(),
        })?;

    let timestamp = match field.value {
        exif::Value::Ascii(ref lines) => lines
            .first()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .map(|s| s.trim_end_matches('\0').to_string()),
        _ => None,
    }
    .ok_or_else(|| EmbeddedError::MissingField {
        path: path.to_path_buf(),
    })?;

    DateLabel::from_exif_timestamp(&timestamp).ok_or_else(|| EmbeddedError::Malformed {
        path: path.to_path_buf(),
        value: timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_six_digits() {
        assert_eq!(DateLabel::parse("202305").unwrap().as_str(), "202305");
        assert_eq!(DateLabel::parse(" 202305 ").unwrap().as_str(), "202305");
    }

    #[test]
    fn parse_rejects_wrong_shapes() {
        assert!(DateLabel::parse("2023").is_none());
        assert!(DateLabel::parse("2023056").is_none());
        assert!(DateLabel::parse("2023-5").is_none());
        assert!(DateLabel::parse("").is_none());
    }

    #[test]
    fn label_from_exif_timestamp() {
        let label = DateLabel::from_exif_timestamp("2023:05:10 14:30:00").unwrap();
        assert_eq!(label.as_str(), "202305");
    }

    #[test]
    fn label_from_truncated_timestamp_fails() {
        assert!(DateLabel::from_exif_timestamp("2023:0").is_none());
        assert!(DateLabel::from_exif_timestamp("").is_none());
    }

    #[test]
    fn timing_merge_sums_buckets() {
        let mut total = TimingAccumulator::default();
        total.merge(TimingAccumulator {
            embedded: Duration::from_millis(5),
            external: Duration::from_millis(70),
        });
        total.merge(TimingAccumulator {
            embedded: Duration::from_millis(3),
            external: Duration::ZERO,
        });
        assert_eq!(total.embedded, Duration::from_millis(8));
        assert_eq!(total.external, Duration::from_millis(70));
    }

    #[test]
    fn embedded_tier_rejects_non_image_bytes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("clip.mov");
        std::fs::write(&path, b"not an image at all").unwrap();

        let result = read_embedded_label(&path);
        assert!(matches!(result, Err(EmbeddedError::NotAnImage { .. })));
    }

    #[test]
    fn embedded_tier_reports_open_failure() {
        let result = read_embedded_label(Path::new("/nonexistent/photo.jpg"));
        assert!(matches!(result, Err(EmbeddedError::Open { .. })));
    }
}
