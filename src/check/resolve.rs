//! Link and image resolution for one markdown file
//!
//! Classifies every extracted link and image, resolves internal targets
//! relative to the file's directory and reports what cannot be found.

use log::debug;
use std::path::Path;

use crate::check::suggest::{did_you_mean, find_similar_files, MAX_SUGGESTIONS};
use crate::core::file_reader::read_text;
use crate::core::model::{Category, Issue};
use crate::core::paths::resolve_from;
use crate::core::util::{has_scheme, percent_decode};
use crate::markdown::extract::{extract_images, extract_links, Image, Link};
use crate::markdown::headings::{extract_headings, sorted_anchors, HeadingSet};

/// Link schemes that are never checked
const EXTERNAL_LINK_SCHEMES: [&str; 4] = ["http", "https", "mailto", "ftp"];

/// Image schemes that are never checked
const EXTERNAL_IMAGE_SCHEMES: [&str; 3] = ["http", "https", "data"];

/// Maximum number of anchors listed in a missing-anchor suggestion
const MAX_LISTED_ANCHORS: usize = 5;

/// Check a single markdown file for issues
pub fn check_file(path: &Path, relative: &str, root: &Path) -> Vec<Issue> {
    let content = match read_text(path) {
        Ok(c) => c,
        Err(err) => {
            return vec![Issue::critical(
                relative,
                0,
                Category::ReadError,
                format!("Cannot read file: {}", err),
            )];
        }
    };

    let checker = FileChecker {
        relative,
        root,
        file_dir: path.parent().unwrap_or(root),
        headings: extract_headings(&content),
    };

    let links = extract_links(&content);
    let images = extract_images(&content);
    debug!(
        "{}: {} links, {} images, {} anchors",
        relative,
        links.len(),
        images.len(),
        checker.headings.len()
    );

    links
        .iter()
        .filter_map(|link| checker.check_link(link))
        .chain(images.iter().filter_map(|image| checker.check_image(image)))
        .collect()
}

/// Per-file resolution context
struct FileChecker<'a> {
    /// Reported path of the file under check
    relative: &'a str,
    /// Scan root, searched for suggestions
    root: &'a Path,
    file_dir: &'a Path,
    headings: HeadingSet,
}

impl FileChecker<'_> {
    fn check_link(&self, link: &Link) -> Option<Issue> {
        // Reference-style links are not resolved
        if let Some(label) = link.reference() {
            debug!(
                "{}:{}: not resolving reference link [{}][{}]",
                self.relative, link.line, link.text, label
            );
            return None;
        }
        if has_scheme(&link.target, &EXTERNAL_LINK_SCHEMES) {
            return None;
        }

        let decoded = percent_decode(&link.target);
        let (path_part, anchor) = match decoded.split_once('#') {
            Some((path_part, anchor)) => (path_part, anchor),
            None => (decoded.as_str(), ""),
        };

        if !path_part.is_empty() {
            self.check_cross_file(link.line, path_part, anchor)
        } else if !anchor.is_empty() {
            self.check_same_file_anchor(link.line, anchor)
        } else {
            None
        }
    }

    fn check_cross_file(&self, line: u32, path_part: &str, anchor: &str) -> Option<Issue> {
        let target = resolve_from(self.file_dir, path_part);

        if !target.exists() {
            let similar = find_similar_files(path_part, self.root, MAX_SUGGESTIONS);
            return Some(
                Issue::critical(
                    self.relative,
                    line,
                    Category::BrokenLink,
                    format!("Link target not found: {}", path_part),
                )
                .with_suggestion(did_you_mean(&similar)),
            );
        }

        if anchor.is_empty() {
            return None;
        }

        let target_content = match read_text(&target) {
            Ok(c) => c,
            Err(err) => {
                debug!(
                    "{}:{}: skipping anchor check for {}: {}",
                    self.relative,
                    line,
                    target.display(),
                    err
                );
                return None;
            }
        };

        let target_headings = extract_headings(&target_content);
        if target_headings.contains(anchor) {
            return None;
        }

        Some(
            Issue::warning(
                self.relative,
                line,
                Category::MissingAnchor,
                format!("Anchor #{} not found in {}", anchor, path_part),
            )
            .with_suggestion(available_anchors(&target_headings)),
        )
    }

    fn check_same_file_anchor(&self, line: u32, anchor: &str) -> Option<Issue> {
        if self.headings.contains(anchor) {
            return None;
        }

        Some(
            Issue::warning(
                self.relative,
                line,
                Category::MissingAnchor,
                format!("Anchor #{} not found in this file", anchor),
            )
            .with_suggestion(available_anchors(&self.headings)),
        )
    }

    fn check_image(&self, image: &Image) -> Option<Issue> {
        if has_scheme(&image.path, &EXTERNAL_IMAGE_SCHEMES) {
            return None;
        }

        let target = resolve_from(self.file_dir, &percent_decode(&image.path));
        if target.exists() {
            return None;
        }

        Some(Issue::critical(
            self.relative,
            image.line,
            Category::MissingImage,
            format!("Image not found: {}", image.path),
        ))
    }
}

fn available_anchors(headings: &HeadingSet) -> Option<String> {
    if headings.is_empty() {
        return None;
    }
    Some(format!(
        "Available anchors: {}",
        sorted_anchors(headings, MAX_LISTED_ANCHORS).join(", ")
    ))
}
