//! Content directory discovery.
//!
//! Walks exactly one level below the asset root: every immediate
//! subdirectory is a content directory, and every file directly inside one
//! whose extension matches the image set is a candidate for renaming.
//! Nothing recurses further, and files sitting loose in the root are
//! ignored.
//!
//! ```text
//! content-list/                    # Asset root
//! ├── post-a/                      # Content directory
//! │   ├── a.jpg                    # Image — candidate
//! │   ├── b.png                    # Image — candidate
//! │   └── notes.txt                # Not an image — left alone
//! ├── post-b/
//! │   └── cover.WEBP               # Matching is case-insensitive
//! └── stray.jpg                    # Loose file in root — ignored
//! ```
//!
//! Image lists are sorted by full path, which fixes the index each file
//! receives during planning. Sorting is plain lexicographic byte order:
//! `img10.jpg` comes before `img2.jpg`.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot read asset root {0}: {1}")]
    Root(PathBuf, std::io::Error),
}

/// Extensions recognized as images. Detection lower-cases the file's
/// extension before matching; the file name itself is never altered.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"];

/// One immediate subdirectory of the asset root with its image files.
#[derive(Debug, Clone)]
pub struct ContentDir {
    pub path: PathBuf,
    /// Image files directly inside, sorted by full path.
    pub images: Vec<PathBuf>,
}

impl ContentDir {
    /// Directory name for display and reporting.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// List the immediate subdirectories of `root`, sorted by path.
///
/// Failing to read the root is the one error that aborts a whole run, so
/// it surfaces here rather than per directory.
pub fn content_dirs(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(root)
        .map_err(|e| ScanError::Root(root.to_path_buf(), e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();

    dirs.sort();
    Ok(dirs)
}

/// Collect the sorted image files directly inside one content directory.
pub fn scan_dir(path: &Path) -> Result<ContentDir, ScanError> {
    let mut images: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_image(p))
        .collect();

    images.sort();
    Ok(ContentDir {
        path: path.to_path_buf(),
        images,
    })
}

fn is_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}
