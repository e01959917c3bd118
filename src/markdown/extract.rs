//! Link and image extraction
//!
//! Lines inside fenced code blocks are skipped, and inline code spans are
//! removed before scanning, so link syntax inside code is never reported.

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix marking reference-style link targets
pub const REF_PREFIX: &str = "ref:";

const FENCE: &str = "```";

static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`[^`]+`").expect("Invalid INLINE_CODE_RE regex"));

/// Format: [text](target)
static INLINE_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("Invalid INLINE_LINK_RE regex"));

/// Format: [text][ref] or [text][]
static REF_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\[([^\]]*)\]").expect("Invalid REF_LINK_RE regex"));

/// Format: ![alt](path)
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").expect("Invalid IMAGE_RE regex"));

/// A link occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// 1-indexed line number
    pub line: u32,
    pub text: String,
    /// Raw target, or `ref:<label>` for reference-style links
    pub target: String,
}

impl Link {
    /// Label of a reference-style link
    pub fn reference(&self) -> Option<&str> {
        self.target.strip_prefix(REF_PREFIX)
    }
}

/// An image occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// 1-indexed line number
    pub line: u32,
    pub path: String,
}

/// Lines outside fenced code blocks, with inline code removed
fn scannable_lines(content: &str) -> Vec<(u32, String)> {
    let mut in_code_block = false;
    let mut lines = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        // Opening and closing fences both toggle, even on a single line
        if line.trim().starts_with(FENCE) {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            continue;
        }

        let line_no_code = INLINE_CODE_RE.replace_all(line, "");
        lines.push((idx as u32 + 1, line_no_code.into_owned()));
    }

    lines
}

/// Extract all links: inline links first, then reference-style links, per line
pub fn extract_links(content: &str) -> Vec<Link> {
    let mut links = Vec::new();

    for (line, text) in scannable_lines(content) {
        for caps in INLINE_LINK_RE.captures_iter(&text) {
            links.push(Link {
                line,
                text: caps[1].to_string(),
                target: caps[2].to_string(),
            });
        }

        for caps in REF_LINK_RE.captures_iter(&text) {
            let label = match &caps[2] {
                "" => &caps[1],
                label => label,
            };
            links.push(Link {
                line,
                text: caps[1].to_string(),
                target: format!("{}{}", REF_PREFIX, label),
            });
        }
    }

    links
}

/// Extract all image references
pub fn extract_images(content: &str) -> Vec<Image> {
    scannable_lines(content)
        .into_iter()
        .flat_map(|(line, text)| {
            IMAGE_RE
                .captures_iter(&text)
                .map(|caps| Image {
                    line,
                    path: caps[1].to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
