//! Canonical thumbnail name derivation.
//!
//! Every image in a content directory is renamed by its position in the
//! sorted file list:
//!
//! - Sole image: `thumbnail<ext>` — `cover.WEBP` → `thumbnail.WEBP`
//! - Several images: `thumbnail-<i><ext>` with 0-based index —
//!   `a.jpg`, `b.png` → `thumbnail-0.jpg`, `thumbnail-1.png`
//!
//! The extension is carried over verbatim, leading dot and letter case
//! included. Matching against the image set is case-insensitive, but the
//! emitted name never changes the casing the file arrived with.

use std::path::Path;

/// Stem shared by every canonical name.
pub const THUMBNAIL_STEM: &str = "thumbnail";

/// Extension of `path` exactly as written, with its leading dot.
///
/// - `cover.WEBP` → `".WEBP"`
/// - `photo.jpg` → `".jpg"`
/// - `README` → `""`
pub fn raw_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}

/// Canonical file name for the image at `index` out of `total` in its
/// directory. `ext` is a [`raw_extension`]-style suffix.
pub fn canonical_file_name(index: usize, total: usize, ext: &str) -> String {
    if total == 1 {
        format!("{THUMBNAIL_STEM}{ext}")
    } else {
        format!("{THUMBNAIL_STEM}-{index}{ext}")
    }
}
