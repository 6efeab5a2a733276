//! # CLI Module
//!
//! Command-line interface for photo-tidy.
//!
//! ## Usage
//! ```bash
//! # Report groups of byte-identical files
//! photo-tidy duplicates ~/Photos ~/Downloads
//!
//! # Preview the year-month organization of a directory
//! photo-tidy organize ~/Photos
//!
//! # Actually move the files, logging to a file
//! photo-tidy organize ~/Photos --make-changes --log-file organize.log
//! ```

use clap::{Parser, Subcommand};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use photo_tidy::core::{
    duplicates, listing, DateExtractor, ExifTool, MoveExecutor, MovePlanner, TimingAccumulator,
};
use photo_tidy::error::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::info;

/// photo-tidy - find duplicate photos and file them by capture date
#[derive(Parser, Debug)]
#[command(name = "photo-tidy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report groups of byte-identical files
    Duplicates {
        /// Directories to search
        #[arg(required = true)]
        directories: Vec<PathBuf>,

        /// Recursively search in directories
        #[arg(long)]
        recursive: bool,
    },
    /// File photos into year-month subdirectories by capture date
    Organize {
        /// Directory to look for photos to organize
        directory: PathBuf,

        /// Recursively search in the directory
        #[arg(long)]
        recursive: bool,

        /// Make changes. Otherwise, only log what would move
        #[arg(long)]
        make_changes: bool,

        /// Write the run log to this file instead of stderr
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Duplicates {
            directories,
            recursive,
        } => {
            let _guard = photo_tidy::init_tracing(None);
            run_duplicates(directories, recursive)
        }
        Commands::Organize {
            directory,
            recursive,
            make_changes,
            log_file,
        } => {
            let _guard = photo_tidy::init_tracing(log_file.as_deref());
            run_organize(directory, recursive, make_changes)
        }
    }
}

fn run_duplicates(directories: Vec<PathBuf>, recursive: bool) -> Result<()> {
    let term = Term::stdout();

    // A directory given twice must not make every file its own duplicate
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    for dir in &directories {
        files.extend(listing::list_files(dir, recursive)?);
    }
    let files: Vec<PathBuf> = files.into_iter().collect();
    info!("Checking {} files for duplicates", files.len());

    let outcome = duplicates::group_by_digest(&files);

    if outcome.groups.is_empty() {
        term.write_line(&format!(
            "{} no duplicates among {} files",
            style("✓").green(),
            files.len()
        ))
        .ok();
    } else {
        term.write_line(&format!(
            "{} duplicate group(s) among {} files:",
            style(outcome.groups.len()).red().bold(),
            files.len()
        ))
        .ok();
        for group in &outcome.groups {
            term.write_line(&format!("  {}", style(&group.digest).dim())).ok();
            for member in &group.members {
                term.write_line(&format!("    {}", member.display())).ok();
            }
        }
    }

    if !outcome.errors.is_empty() {
        term.write_line(&format!(
            "{} file(s) could not be read; see the log",
            style(outcome.errors.len()).yellow()
        ))
        .ok();
    }

    Ok(())
}

fn run_organize(directory: PathBuf, recursive: bool, make_changes: bool) -> Result<()> {
    let term = Term::stdout();

    let files = listing::list_files(&directory, recursive)?;
    info!("Found {} files to organize", files.len());

    let extractor = DateExtractor::new(ExifTool);
    let mut timing = TimingAccumulator::default();

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );

    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        progress.set_message(
            file.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        let label = extractor.extract(&file, &mut timing);
        match &label {
            Some(label) => info!("Will move {} into {}/", file.display(), label),
            None => info!("Could not find create date for {}", file.display()),
        }
        entries.push((file, label));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let plan = MovePlanner::plan(entries);
    info!(
        "Will move {} files. Failed to find date of {} files.",
        plan.to_move, plan.failed
    );
    info!(
        "Timing data: embedded metadata {:.3}s, external tool {:.3}s",
        timing.embedded.as_secs_f64(),
        timing.external.as_secs_f64()
    );

    if !make_changes {
        term.write_line(&format!(
            "{} planned move(s), {} without a date. Re-run with {} to apply.",
            style(plan.to_move).cyan(),
            style(plan.failed).yellow(),
            style("--make-changes").bold()
        ))
        .ok();
        return Ok(());
    }

    let report = MoveExecutor::execute(&plan, &directory);
    term.write_line(&format!(
        "{} moved, {} skipped (target existed), {} failed, {} without a date",
        style(report.moved).green(),
        style(report.skipped_existing).yellow(),
        style(report.errors.len()).red(),
        style(plan.failed).yellow()
    ))
    .ok();

    Ok(())
}
