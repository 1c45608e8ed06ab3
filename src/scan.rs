//! Directory scanning for building an item sequence from a photo library.

use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::{DirEntry, WalkDir};

use crate::error::Error;
use crate::item::{Item, ItemSequence};

/// Options controlling directory scanning.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional maximum recursion depth. `None` or `Some(0)` means unlimited.
    pub max_depth: Option<usize>,
    /// Optional override for allowed extensions (lowercase, without dot).
    pub exts: Option<Vec<&'static str>>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            max_depth: None,
            exts: None,
        }
    }
}

/// Return `true` if `path` has an allowed image extension.
#[must_use]
pub fn is_supported_image(path: &Path, exts: Option<&[&str]>) -> bool {
    let default_exts: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "avif", "svg"];
    let exts = exts.unwrap_or(default_exts);
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| *e == ext)
        })
}

/// Scan `root` for images, in file name order, and number them as a sequence.
///
/// # Errors
/// Returns [`Error::BadDir`] if `root` is missing or not a directory, and
/// [`Error::EmptyScan`] if it holds no images.
pub fn scan_library(root: &Path, opts: &ScanOptions) -> Result<ItemSequence, Error> {
    if !root.is_dir() {
        return Err(Error::BadDir(root.to_string_lossy().into_owned()));
    }

    let mut wd = WalkDir::new(root).sort_by_file_name();
    if !opts.recursive {
        wd = wd.max_depth(1);
    } else if let Some(d) = opts.max_depth
        && d > 0
    {
        wd = wd.max_depth(d);
    }

    let paths: Vec<PathBuf> = wd
        .into_iter()
        // Skip hidden dot-directories *below* the root only.
        .filter_entry(|e| !should_skip_dir(e))
        .flatten()
        .map(DirEntry::into_path)
        .filter(|path| path.is_file() && is_supported_image(path, opts.exts.as_deref()))
        .collect();

    if paths.is_empty() {
        return Err(Error::EmptyScan);
    }
    info!(root = %root.display(), discovered = paths.len(), "library scan complete");

    let items = paths
        .iter()
        .enumerate()
        .map(|(index, path)| Item::from_path(index, path))
        .collect();
    ItemSequence::new(items)
}

fn should_skip_dir(entry: &DirEntry) -> bool {
    // Never skip the root; tempfile roots can be dot-dirs.
    if entry.depth() == 0 {
        return false;
    }
    if !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|n| n.starts_with('.'))
}
