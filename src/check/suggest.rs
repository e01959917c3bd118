//! Similar-file suggestions for broken link targets

use std::cmp::Reverse;
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::paths::make_relative;

/// Maximum number of suggested files
pub const MAX_SUGGESTIONS: usize = 3;

/// Extensions of files that may be suggested
const CANDIDATE_EXTENSIONS: [&str; 4] = ["md", "mdx", "rst", "txt"];

/// Score for a file name containing the target name (or vice versa)
const NAME_MATCH_SCORE: u32 = 2;

/// Score for an identical extension
const EXTENSION_MATCH_SCORE: u32 = 1;

/// Find files under `search_root` whose names resemble `target`.
///
/// Returns up to `max_results` root-relative paths, best score first; equal
/// scores keep traversal order.
pub fn find_similar_files(target: &str, search_root: &Path, max_results: usize) -> Vec<String> {
    let target_path = Path::new(target);
    let target_name = lowercase_name(target_path.file_name());
    let target_extension = target_path.extension();

    let mut candidates: Vec<(u32, String)> = WalkDir::new(search_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter(|entry| is_candidate(entry.path()))
        .filter_map(|entry| {
            let path = entry.path();
            let name = lowercase_name(path.file_name());

            let mut score = 0;
            if name.contains(&target_name) || target_name.contains(&name) {
                score += NAME_MATCH_SCORE;
            }
            if target_extension.is_some() && path.extension() == target_extension {
                score += EXTENSION_MATCH_SCORE;
            }

            if score == 0 {
                return None;
            }
            make_relative(path, search_root).map(|relative| (score, relative))
        })
        .collect();

    // Stable sort keeps traversal order among equal scores
    candidates.sort_by_key(|(score, _)| Reverse(*score));

    candidates
        .into_iter()
        .take(max_results)
        .map(|(_, relative)| relative)
        .collect()
}

/// Render suggestions as a fix hint
pub fn did_you_mean(similar: &[String]) -> Option<String> {
    if similar.is_empty() {
        None
    } else {
        Some(format!("Did you mean: {}", similar.join(", ")))
    }
}

fn is_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| CANDIDATE_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

fn lowercase_name(name: Option<&OsStr>) -> String {
    name.map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
