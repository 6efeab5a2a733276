//! External-tool tier backed by the `exiftool` command.

use super::DateLabel;
use crate::error::ToolError;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::process::Command;

/// Source of creation dates for files the embedded tier cannot read
///
/// Injectable so tests can count invocations and avoid process spawns.
pub trait CreationDateTool {
    fn creation_date(&self, path: &Path) -> Result<DateLabel, ToolError>;
}

/// One object of the JSON array exiftool prints per file
#[derive(Debug, Deserialize)]
struct ExifToolRecord {
    #[serde(rename = "CreateDate")]
    create_date: Option<Value>,
}

impl ExifToolRecord {
    /// exiftool prints an all-digit `%Y%m` date as a bare number, so the
    /// field can arrive as either a string or an integer.
    fn label(&self) -> Option<DateLabel> {
        match &self.create_date {
            Some(Value::String(s)) => DateLabel::parse(s),
            Some(Value::Number(n)) => DateLabel::parse(&n.to_string()),
            _ => None,
        }
    }
}

/// Spawns `exiftool <path> -json -dateFormat %Y%m` and reads the
/// creation date from its output.
pub struct ExifTool;

impl CreationDateTool for ExifTool {
    fn creation_date(&self, path: &Path) -> Result<DateLabel, ToolError> {
        let output = Command::new("exiftool")
            .arg(path)
            .arg("-json")
            .arg("-dateFormat")
            .arg("%Y%m")
            .output()
            .map_err(|source| ToolError::Spawn {
                path: path.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(ToolError::NonZeroExit {
                path: path.to_path_buf(),
                status: output.status,
            });
        }

        let records: Vec<ExifToolRecord> =
            serde_json::from_slice(&output.stdout).map_err(|err| ToolError::MalformedOutput {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;

        let record = records
            .into_iter()
            .next()
            .ok_or_else(|| ToolError::MalformedOutput {
                path: path.to_path_buf(),
                reason: "empty record array".to_string(),
            })?;

        record.label().ok_or_else(|| ToolError::MissingDate {
            path: path.to_path_buf(),
        })
    }
}
