//! Rename planning, validation, and application.
//!
//! Each content directory is handled in three steps:
//!
//! 1. **Plan** — zip the sorted image list with canonical names, producing
//!    a list of `from → to` pairs.
//! 2. **Validate** — refuse the whole plan if any target already exists on
//!    disk. This includes a file being renamed onto its own name, so
//!    re-running over an already-normalized directory fails rather than
//!    silently overwriting or half-renaming anything.
//! 3. **Apply** — execute the renames sequentially with `fs::rename`,
//!    recording each success.
//!
//! Directories are isolated units: a collision or I/O failure in one
//! becomes a `Failed` entry in the [`RunReport`] and the run continues with
//! the next directory. Renames already applied in a directory that later
//! hits an I/O error keep their renamed state — there is no rollback.

use crate::naming;
use crate::scan::{self, ContentDir, ScanError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("target already exists: {0}")]
    Collision(PathBuf),
}

/// One planned rename inside a content directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// A completed rename, recorded by file name for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenameRecord {
    pub from: String,
    pub to: String,
}

/// What happened to one content directory.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DirOutcome {
    /// Every image renamed to its canonical name.
    Renamed { renames: Vec<RenameRecord> },
    /// No matching image files; nothing to do.
    NoImages,
    /// Collision or I/O failure; the error is carried as display text.
    Failed { error: String },
}

/// Report entry for one content directory.
///
/// Serializes flat: `{"dir": "post-a", "outcome": "renamed", "renames": [..]}`.
#[derive(Debug, Serialize)]
pub struct DirReport {
    pub dir: String,
    #[serde(flatten)]
    pub outcome: DirOutcome,
}

/// Per-directory outcomes for a full run, in visit order.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub dirs: Vec<DirReport>,
}

impl RunReport {
    /// Number of directories that failed.
    pub fn failed(&self) -> usize {
        self.dirs
            .iter()
            .filter(|d| matches!(d.outcome, DirOutcome::Failed { .. }))
            .count()
    }

    /// Total renames applied across all directories.
    pub fn renamed(&self) -> usize {
        self.dirs
            .iter()
            .map(|d| match &d.outcome {
                DirOutcome::Renamed { renames } => renames.len(),
                _ => 0,
            })
            .sum()
    }
}

/// Pair every image in `dir` with its canonical target path.
///
/// Index order is the sorted order established by the scan. Empty when the
/// directory holds no images.
pub fn plan_renames(dir: &ContentDir) -> Vec<Rename> {
    let total = dir.images.len();
    dir.images
        .iter()
        .enumerate()
        .map(|(index, from)| {
            let ext = naming::raw_extension(from);
            let to = dir.path.join(naming::canonical_file_name(index, total, &ext));
            Rename {
                from: from.clone(),
                to,
            }
        })
        .collect()
}

/// Refuse a plan whose targets are not all free.
///
/// Runs before any rename in the directory, so a collision leaves the
/// directory exactly as it was found. A source already sitting at its own
/// target name counts as a collision too — normalizing twice is an error.
pub fn validate_plan(plan: &[Rename]) -> Result<(), NormalizeError> {
    for rename in plan {
        if rename.to.exists() {
            return Err(NormalizeError::Collision(rename.to.clone()));
        }
    }
    Ok(())
}

/// Execute a validated plan sequentially.
pub fn apply_plan(plan: &[Rename]) -> Result<Vec<RenameRecord>, NormalizeError> {
    let mut records = Vec::with_capacity(plan.len());
    for rename in plan {
        fs::rename(&rename.from, &rename.to)?;
        records.push(RenameRecord {
            from: file_name(&rename.from),
            to: file_name(&rename.to),
        });
    }
    Ok(records)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn normalize_dir(dir: &ContentDir) -> Result<DirOutcome, NormalizeError> {
    if dir.images.is_empty() {
        return Ok(DirOutcome::NoImages);
    }
    let plan = plan_renames(dir);
    validate_plan(&plan)?;
    let renames = apply_plan(&plan)?;
    Ok(DirOutcome::Renamed { renames })
}

/// Run the normalizer over every content directory under `root`.
///
/// Only listing the root itself can fail the call; everything after that is
/// captured per directory in the returned report.
pub fn normalize(root: &Path) -> Result<RunReport, ScanError> {
    let mut dirs = Vec::new();

    for path in scan::content_dirs(root)? {
        let report = match scan::scan_dir(&path) {
            Ok(content) => DirReport {
                dir: content.name(),
                outcome: normalize_dir(&content)
                    .unwrap_or_else(|e| DirOutcome::Failed { error: e.to_string() }),
            },
            Err(e) => DirReport {
                dir: file_name(&path),
                outcome: DirOutcome::Failed {
                    error: e.to_string(),
                },
            },
        };

        dirs.push(report);
    }

    Ok(RunReport { dirs })
}
