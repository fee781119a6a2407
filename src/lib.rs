//! # thumb-tidy
//!
//! A one-shot batch renamer for content asset directories. Your filesystem
//! is the data source: each subdirectory of the asset root holds the images
//! for one content item, and every image is renamed into the canonical
//! thumbnail scheme — `thumbnail.ext` when a directory holds a single image,
//! `thumbnail-0.ext`, `thumbnail-1.ext`, … (sorted order) when it holds
//! several.
//!
//! # Architecture: Scan → Plan → Apply
//!
//! Each run moves through three small stages per content directory:
//!
//! ```text
//! 1. Scan      root/          →  ContentDir       (subdirs + sorted image lists)
//! 2. Plan      ContentDir     →  Vec<Rename>      (canonical targets, validated)
//! 3. Apply     Vec<Rename>    →  DirReport        (sequential fs::rename)
//! ```
//!
//! The stages are separate so the pure parts (target naming, plan building,
//! output formatting) can be unit tested without touching the filesystem,
//! and so plan validation can refuse a directory *before* any rename in it
//! has happened.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Enumerates content directories and their image files, sorted |
//! | [`naming`] | Canonical `thumbnail[-N].ext` name derivation (pure) |
//! | [`normalize`] | Rename planning, collision validation, application, run report |
//! | [`output`] | Console formatting — pure `format_*` functions plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Pre-Flight Collision Validation
//!
//! A rename plan is validated as a whole before any rename in its directory
//! executes. If any canonical target already exists on disk — including a
//! file being renamed onto its own name — the directory fails with a
//! collision and is left exactly as it was found. There is no conflict
//! resolution and no overwriting: re-running the tool over an
//! already-normalized directory is an error, not a no-op.
//!
//! ## Per-Directory Failure Isolation
//!
//! Directories are independent units of work. A collision or I/O failure in
//! one is recorded in the [`normalize::RunReport`] and the run moves on to
//! the next directory; the process exits non-zero at the end if anything
//! failed. Only a failure to list the asset root itself aborts the run.
//!
//! ## Names Only, Never Contents
//!
//! Image files are recognized purely by extension (case-insensitive) and
//! renamed in place. No file content is ever read, decoded, or written, so
//! a run is cheap regardless of image sizes.

pub mod naming;
pub mod normalize;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
