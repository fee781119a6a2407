//! Shared test utilities for the thumb-tidy test suite.
//!
//! Fixtures are built directly in temp directories — image files are
//! one-line placeholders, since the tool only ever looks at names.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = asset_root();
//! let dir = content_dir(tmp.path(), "post-a", &["b.png", "a.jpg"]);
//!
//! let report = crate::normalize::normalize(tmp.path()).unwrap();
//! assert_eq!(dir_listing(&dir), vec!["thumbnail-0.jpg", "thumbnail-1.png"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fresh temp directory standing in for the asset root.
pub fn asset_root() -> TempDir {
    TempDir::new().unwrap()
}

/// Create a content directory under `root` holding the given files.
pub fn content_dir(root: &Path, name: &str, files: &[&str]) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    for file in files {
        fs::write(dir.join(file), "fake image").unwrap();
    }
    dir
}

/// File names directly inside `dir`, sorted.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
