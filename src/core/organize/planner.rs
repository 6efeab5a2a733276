//! Plan generator: pairs each dated file with its target subdirectory.

use crate::core::date::DateLabel;
use std::path::PathBuf;

/// One file and the year-month subdirectory it belongs in
#[derive(Debug, Clone)]
pub struct PlannedMove {
    pub source: PathBuf,
    pub label: DateLabel,
}

/// The computed moves plus summary counts for reporting
#[derive(Debug, Clone, Default)]
pub struct MovePlan {
    pub moves: Vec<PlannedMove>,
    /// Files with a resolved capture date
    pub to_move: usize,
    /// Files whose capture date could not be determined
    pub failed: usize,
}

/// Builds move plans from extraction results
pub struct MovePlanner;

impl MovePlanner {
    /// Pure planning step: no I/O, no side effects. Files without a label
    /// are only counted; they never enter the plan.
    pub fn plan(entries: Vec<(PathBuf, Option<DateLabel>)>) -> MovePlan {
        let mut plan = MovePlan::default();
        for (source, label) in entries {
            match label {
                Some(label) => {
                    plan.moves.push(PlannedMove { source, label });
                    plan.to_move += 1;
                }
                None => plan.failed += 1,
            }
        }
        plan
    }
}
