//! Markdown file discovery
//!
//! Uses walkdir for traversal. Entries are visited in file-name order at every
//! directory level; all `.md` files come before all `.mdx` files.

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::check::CheckError;
use crate::core::model::FileIndex;
use crate::core::paths::{absolutize, make_relative};

/// Extensions checked when scanning a directory, in discovery order
pub const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Result of discovery
#[derive(Debug)]
pub struct Discovery {
    /// Directory that reported paths are relative to
    pub root: PathBuf,
    pub index: FileIndex,
}

/// Discover markdown files under `path`, or take `path` itself if it is a file
pub fn discover(path: &Path) -> Result<Discovery, CheckError> {
    let absolute = absolutize(path);
    if !absolute.exists() {
        return Err(CheckError::PathNotFound(absolute));
    }
    let target = absolute
        .canonicalize()
        .map_err(|_| CheckError::PathNotFound(absolute.clone()))?;

    if target.is_file() {
        let root = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));
        let mut index = FileIndex::new();
        if let Some(relative) = make_relative(&target, &root) {
            index.insert(relative, target.clone());
        }
        debug!("checking single file {}", target.display());
        return Ok(Discovery { root, index });
    }

    let index = scan_markdown(&target);
    debug!(
        "discovered {} markdown files under {}",
        index.len(),
        target.display()
    );
    Ok(Discovery {
        root: target,
        index,
    })
}

/// Recursively index markdown files under `root`
pub fn scan_markdown(root: &Path) -> FileIndex {
    let mut by_extension: Vec<Vec<PathBuf>> = vec![Vec::new(); MARKDOWN_EXTENSIONS.len()];

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!("skipping unreadable entry: {}", err);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let extension = path.extension().and_then(|e| e.to_str());
        if let Some(slot) = MARKDOWN_EXTENSIONS
            .iter()
            .position(|ext| Some(*ext) == extension)
        {
            by_extension[slot].push(path.to_path_buf());
        }
    }

    let mut index = FileIndex::new();
    for path in by_extension.into_iter().flatten() {
        if let Some(relative) = make_relative(&path, root) {
            index.insert(relative, path);
        }
    }
    index
}
