//! Path normalization utilities
//!
//! Reported paths always use '/' as separator and are relative to the scan root.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Resolve `.` and `..` components without touching the filesystem
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root stays at the root
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Absolute, lexically normalized form of a path that may not exist
pub fn absolutize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_lexically(&absolute)
}

/// Resolve `target` against `base_dir`.
///
/// Existing paths are canonicalized (symlinks followed); for paths that do not
/// exist the lexically normalized join is returned. An absolute `target`
/// replaces `base_dir`.
pub fn resolve_from(base_dir: &Path, target: &str) -> PathBuf {
    let joined = base_dir.join(target);
    if let Ok(canonical) = fs::canonicalize(&joined) {
        return canonical;
    }
    let normalized = normalize_lexically(&joined);
    fs::canonicalize(&normalized).unwrap_or(normalized)
}
