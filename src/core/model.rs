//! Issue and Report model
//!
//! Every check produces `Issue` records; the reporter only ever sees a `Report`.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Severity of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    /// All severities in report order
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Info];

    /// Group label used by the text reporter
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

/// Category tag of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BrokenLink,
    MissingAnchor,
    MissingImage,
    ReadError,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BrokenLink => "broken-link",
            Category::MissingAnchor => "missing-anchor",
            Category::MissingImage => "missing-image",
            Category::ReadError => "read-error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in a markdown file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Path of the checked file, relative to the scan root, using '/' as separator
    pub file: String,

    /// 1-indexed line number (0 when the issue concerns the whole file)
    pub line: u32,

    pub severity: Severity,

    pub category: Category,

    pub message: String,

    /// Optional fix hint (similar files, available anchors)
    pub suggestion: Option<String>,
}

impl Issue {
    pub fn critical(
        file: impl Into<String>,
        line: u32,
        category: Category,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            severity: Severity::Critical,
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn warning(
        file: impl Into<String>,
        line: u32,
        category: Category,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            severity: Severity::Warning,
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attach an optional suggestion
    pub fn with_suggestion(mut self, suggestion: Option<String>) -> Self {
        self.suggestion = suggestion;
        self
    }
}

/// A discovered markdown file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFile {
    /// Path relative to the scan root, using '/' as separator
    pub relative: String,

    /// Absolute path on disk
    pub absolute: PathBuf,
}

/// Discovery-ordered index of the markdown files under check.
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    files: Vec<IndexedFile>,
    by_relative: HashMap<String, usize>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; a relative path that is already indexed is ignored
    pub fn insert(&mut self, relative: impl Into<String>, absolute: impl Into<PathBuf>) {
        let relative = relative.into();
        if self.contains(&relative) {
            return;
        }
        self.by_relative.insert(relative.clone(), self.files.len());
        self.files.push(IndexedFile {
            relative,
            absolute: absolute.into(),
        });
    }

    pub fn contains(&self, relative: &str) -> bool {
        self.by_relative.contains_key(relative)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// All issues of a run, in file-discovery order then emission order
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub issues: Vec<Issue>,
    pub files_checked: usize,
}

impl Report {
    pub fn new(files_checked: usize) -> Self {
        Self {
            issues: Vec::new(),
            files_checked,
        }
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Issues of one severity, order preserved
    pub fn with_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .collect()
    }
}
