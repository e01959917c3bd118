//! linkaudit - An offline link checker for markdown documentation
//!
//! linkaudit provides:
//! - Recursive discovery of markdown files (.md/.mdx)
//! - Heading anchor extraction (explicit `{#id}` and derived slugs)
//! - Resolution of internal links, anchors and images
//! - Name-based suggestions for broken link targets
//! - Grouped text or JSON reports

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod check;
mod cli;
mod core;
mod markdown;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbose);
    cli::run(cli)
}
