//! Heading anchor extraction
//!
//! An anchor is either the explicit id of `## Title {#id}` or the slug of the
//! heading text. Duplicate headings share one slug (no `-1`, `-2` suffixes).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Anchors defined by one file
pub type HeadingSet = HashSet<String>;

/// Format: `#{1,6} text` with an optional trailing `{#id}`
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#{1,6}\s+(.+?)(?:\s*\{#([^}]+)\})?$").expect("Invalid HEADING_RE regex")
});

static SLUG_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("Invalid SLUG_STRIP_RE regex"));

static SLUG_COLLAPSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s]+").expect("Invalid SLUG_COLLAPSE_RE regex"));

/// Convert heading text to a GitHub-style anchor slug
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = SLUG_STRIP_RE.replace_all(lowered.trim(), "");
    SLUG_COLLAPSE_RE.replace_all(&stripped, "-").into_owned()
}

/// Extract all heading anchors from markdown content
pub fn extract_headings(content: &str) -> HeadingSet {
    content
        .lines()
        .filter_map(|line| HEADING_RE.captures(line))
        .filter_map(|caps| match caps.get(2) {
            Some(explicit_id) => Some(explicit_id.as_str().to_string()),
            None => caps.get(1).map(|text| slugify(text.as_str())),
        })
        .collect()
}

/// First `limit` anchors in sorted order
pub fn sorted_anchors(headings: &HeadingSet, limit: usize) -> Vec<&str> {
    let mut anchors: Vec<&str> = headings.iter().map(String::as_str).collect();
    anchors.sort_unstable();
    anchors.truncate(limit);
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify("Getting Started!"), "getting-started");
        assert_eq!(slugify("  What's new in v2.0?  "), "whats-new-in-v20");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Foo -- Bar   Baz"), "foo-bar-baz");
        assert_eq!(slugify("A & B"), "a-b");
    }

    #[test]
    fn test_slugify_keeps_unicode_word_chars() {
        assert_eq!(slugify("Über Café"), "über-café");
        assert_eq!(slugify("snake_case_name"), "snake_case_name");
    }

    #[test]
    fn test_slug_has_no_consecutive_hyphens() {
        for text in ["a - - b", "x!!  !!y", "Hello,   World", "--lead and trail--"] {
            let slug = slugify(text);
            assert!(!slug.contains("--"), "{text:?} -> {slug:?}");
            assert_eq!(slug, slug.to_lowercase());
            assert!(slug.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-'));
        }
    }

    #[test]
    fn test_extract_headings() {
        let content = "# Intro\n\nSome text\n\n## Getting Started!\n### Usage {#custom-usage}\n";
        let headings = extract_headings(content);

        assert_eq!(headings.len(), 3);
        assert!(headings.contains("intro"));
        assert!(headings.contains("getting-started"));
        assert!(headings.contains("custom-usage"));
        assert!(!headings.contains("usage"));
    }

    #[test]
    fn test_extract_headings_requires_space_and_max_depth() {
        let content = "#hashtag\n####### seven\n###### six\n";
        let headings = extract_headings(content);

        assert_eq!(headings.len(), 1);
        assert!(headings.contains("six"));
    }

    #[test]
    fn test_duplicate_headings_collapse() {
        let content = "## Setup\ntext\n## Setup\n";
        let headings = extract_headings(content);

        assert_eq!(headings.len(), 1);
        assert!(headings.contains("setup"));
        assert!(!headings.contains("setup-1"));
    }

    #[test]
    fn test_sorted_anchors_limit() {
        let headings: HeadingSet = ["zeta", "alpha", "mu", "beta", "gamma", "delta"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(
            sorted_anchors(&headings, 5),
            vec!["alpha", "beta", "delta", "gamma", "mu"]
        );
    }
}
