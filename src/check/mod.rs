//! Check module - Discovery, resolution and suggestions
//!
//! `check_path` runs the whole pipeline for one invocation: discover the
//! markdown files, check each one in discovery order, collect a Report.

pub mod discover;
pub mod resolve;
pub mod suggest;

use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::model::Report;

/// Run-level failure; per-file problems are reported as issues instead
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),
}

/// Check a directory tree or a single markdown file
pub fn check_path(path: &Path) -> Result<Report, CheckError> {
    let discovery = discover::discover(path)?;
    if discovery.index.is_empty() {
        info!("no markdown files under {}", discovery.root.display());
    }

    let mut report = Report::new(discovery.index.len());
    for file in discovery.index.iter() {
        let issues = resolve::check_file(&file.absolute, &file.relative, &discovery.root);
        debug!("{}: {} issues", file.relative, issues.len());
        report.extend(issues);
    }

    Ok(report)
}
