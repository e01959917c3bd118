//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::core::render::{OutputFormat, RenderConfig, Renderer};

/// linkaudit - check markdown docs for broken internal links, anchors and images.
#[derive(Parser, Debug)]
#[command(name = "linkaudit")]
#[command(
    author,
    version,
    about,
    long_about = r#"linkaudit scans markdown files (.md/.mdx) and reports internal links
whose targets do not exist, anchors that match no heading, and missing images.

External links (http, https, mailto, ftp) are never fetched. Reference-style
links ([text][ref]) are recognized but not resolved.

Exit status is 0 when no issues are found and 1 otherwise.

Examples:
    linkaudit
    linkaudit docs --fix
    linkaudit README.md --json
"#
)]
pub struct Cli {
    /// Directory to scan recursively, or a single markdown file.
    #[arg(
        value_name = "PATH",
        default_value = ".",
        long_help = "Directory to scan recursively for *.md and *.mdx files, or a single\n\
file to check on its own (defaults to the current directory).\n\n\
Reported paths are relative to this directory (or to the file's parent)."
    )]
    pub path: PathBuf,

    /// Emit issues as a JSON array.
    #[arg(
        long,
        long_help = "Emit the full issue list as a JSON array of objects with the keys\n\
file, line, severity, category, message and suggestion (null when absent)."
    )]
    pub json: bool,

    /// Show fix suggestions (text mode only).
    #[arg(
        long,
        long_help = "Print each issue's suggestion when one exists: similar file names for\n\
broken links, available anchors for missing anchors. Ignored with --json."
    )]
    pub fix: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr. RUST_LOG, when set, takes precedence."
    )]
    pub verbose: bool,
}

/// Initialize the stderr logger
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .try_init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let render_config = RenderConfig::with_fixes(format, cli.fix);

    let report = crate::check::check_path(&cli.path)?;

    let renderer = Renderer::with_config(render_config);
    print!("{}", renderer.render(&report));

    Ok(if report.has_issues() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["linkaudit"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(!cli.json);
        assert!(!cli.fix);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_path_and_flags() {
        let cli = Cli::try_parse_from(["linkaudit", "docs", "--json", "--fix", "-v"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("docs"));
        assert!(cli.json);
        assert!(cli.fix);
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["linkaudit", "--bogus"]).is_err());
    }
}
