//! Executor for move plans.

use super::planner::MovePlan;
use crate::error::MoveError;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// What happened when a plan was applied
#[derive(Debug, Default)]
pub struct MoveReport {
    pub moved: usize,
    /// Moves skipped because the target path already existed
    pub skipped_existing: usize,
    pub errors: Vec<MoveError>,
}

/// Applies move plans to the filesystem
pub struct MoveExecutor;

impl MoveExecutor {
    /// Move each planned file into `base_dir/<label>/`.
    ///
    /// A target path that already exists is never overwritten and never
    /// renamed around; the file stays put and the collision is logged.
    /// Any per-file failure leaves that file in place and the run
    /// continues with the rest. There is no rollback; a re-run from
    /// scratch skips already-moved files naturally because they are no
    /// longer listed under `base_dir`.
    pub fn execute(plan: &MovePlan, base_dir: &Path) -> MoveReport {
        let mut report = MoveReport::default();

        for planned in &plan.moves {
            let Some(basename) = planned.source.file_name() else {
                error!("No basename for {}", planned.source.display());
                continue;
            };
            let target_dir = base_dir.join(planned.label.as_str());
            let target = target_dir.join(basename);

            if target.exists() {
                let err = MoveError::TargetExists { target };
                error!("{err}");
                report.skipped_existing += 1;
                continue;
            }

            if !target_dir.exists() {
                if let Err(source) = fs::create_dir_all(&target_dir) {
                    let err = MoveError::CreateDir {
                        dir: target_dir,
                        source,
                    };
                    error!("{err}");
                    report.errors.push(err);
                    continue;
                }
            }

            info!(
                "Moving {} to {}",
                planned.source.display(),
                target.display()
            );
            match fs::rename(&planned.source, &target) {
                Ok(()) => report.moved += 1,
                Err(source) => {
                    let err = MoveError::Rename {
                        from: planned.source.clone(),
                        to: target,
                        source,
                    };
                    error!("{err}");
                    report.errors.push(err);
                }
            }
        }

        report
    }
}
