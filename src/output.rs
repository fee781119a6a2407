//! Console output formatting.
//!
//! Each `format_*` function is pure — no I/O, returns the lines to print —
//! with a `print_*` wrapper that writes them to stdout. Keeping formatting
//! pure lets the tests assert the exact console contract.
//!
//! ```text
//! Renamed: a.jpg -> thumbnail-0.jpg
//! Renamed: b.png -> thumbnail-1.png
//! No image files found in post-b
//! Failed: post-c: target already exists: .../thumbnail-0.jpg
//! Renaming complete!
//! ```
//!
//! Rename lines use file names, not full paths; directory lines use the
//! directory name.

use crate::normalize::{DirOutcome, DirReport, RunReport};

/// Lines for one directory's outcome: one per rename, or a single notice
/// for an empty or failed directory.
pub fn format_dir_report(report: &DirReport) -> Vec<String> {
    match &report.outcome {
        DirOutcome::Renamed { renames } => renames
            .iter()
            .map(|r| format!("Renamed: {} -> {}", r.from, r.to))
            .collect(),
        DirOutcome::NoImages => {
            vec![format!("No image files found in {}", report.dir)]
        }
        DirOutcome::Failed { error } => {
            vec![format!("Failed: {}: {}", report.dir, error)]
        }
    }
}

/// Lines for a full run, ending with the completion line.
pub fn format_run_output(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();
    for dir in &report.dirs {
        lines.extend(format_dir_report(dir));
    }
    lines.push("Renaming complete!".to_string());
    lines
}

/// Print run output to stdout.
pub fn print_run_output(report: &RunReport) {
    for line in format_run_output(report) {
        println!("{}", line);
    }
}
