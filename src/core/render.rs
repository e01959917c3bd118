//! Renderer module
//!
//! Renders a Report as grouped human-readable text or as a JSON array

use colored::Colorize;

use crate::core::model::{Issue, Report, Severity};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Print suggestions under each issue (text only)
    pub show_fixes: bool,
}

impl RenderConfig {
    /// Create a new render config with the fix-suggestion option
    pub fn with_fixes(format: OutputFormat, show_fixes: bool) -> Self {
        Self { format, show_fixes }
    }
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string (newline-terminated)
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(report),
            OutputFormat::Json => self.render_json(report),
        }
    }

    /// Render as a single pretty-printed JSON array
    fn render_json(&self, report: &Report) -> String {
        let mut output =
            serde_json::to_string_pretty(&report.issues).unwrap_or_else(|_| "[]".to_string());
        output.push('\n');
        output
    }

    /// Render grouped by severity
    fn render_text(&self, report: &Report) -> String {
        if !report.has_issues() {
            return format!("No issues found in {} files.\n", report.files_checked);
        }

        let mut output = format!(
            "Found {} issues in {} files\n\n",
            report.issues.len(),
            report.files_checked
        );

        for severity in Severity::ALL {
            let issues = report.with_severity(severity);
            if issues.is_empty() {
                continue;
            }

            let header = format!("## {} ({})", severity.label(), issues.len());
            output.push_str(&format!("{}\n\n", paint_header(severity, &header)));

            for issue in issues {
                self.render_issue(&mut output, issue);
            }
        }

        output
    }

    fn render_issue(&self, output: &mut String, issue: &Issue) {
        let location = format!("{}:{}", issue.file, issue.line);
        output.push_str(&format!("  {} [{}]\n", location.bold(), issue.category));
        output.push_str(&format!("    {}\n", issue.message));

        if self.config.show_fixes {
            if let Some(suggestion) = &issue.suggestion {
                output.push_str(&format!("    {} {}\n", "->".green(), suggestion));
            }
        }

        output.push('\n');
    }
}

fn paint_header(severity: Severity, header: &str) -> String {
    match severity {
        Severity::Critical => header.red().bold().to_string(),
        Severity::Warning => header.yellow().bold().to_string(),
        Severity::Info => header.blue().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Category;

    fn sample_report() -> Report {
        let mut report = Report::new(2);
        report.extend(vec![
            Issue::warning(
                "a.md",
                4,
                Category::MissingAnchor,
                "Anchor #nope not found in this file",
            )
            .with_suggestion(Some("Available anchors: intro, usage".to_string())),
            Issue::critical("a.md", 7, Category::BrokenLink, "Link target not found: gone.md"),
            Issue::critical("b.md", 0, Category::ReadError, "Cannot read file: boom"),
        ]);
        report
    }

    fn render_plain(config: RenderConfig, report: &Report) -> String {
        colored::control::set_override(false);
        Renderer::with_config(config).render(report)
    }

    #[test]
    fn test_render_text_empty() {
        let output = render_plain(
            RenderConfig::with_fixes(OutputFormat::Text, false),
            &Report::new(5),
        );
        assert_eq!(output, "No issues found in 5 files.\n");
    }

    #[test]
    fn test_render_text_groups_critical_first() {
        let output = render_plain(
            RenderConfig::with_fixes(OutputFormat::Text, false),
            &sample_report(),
        );

        assert!(output.starts_with("Found 3 issues in 2 files\n\n"));
        let critical = output.find("## CRITICAL (2)").unwrap();
        let warning = output.find("## WARNING (1)").unwrap();
        assert!(critical < warning);
        assert!(!output.contains("## INFO"));

        // Emission order is kept within a group
        let broken = output.find("a.md:7 [broken-link]").unwrap();
        let read = output.find("b.md:0 [read-error]").unwrap();
        assert!(broken < read);
    }

    #[test]
    fn test_render_text_hides_suggestions_without_fix() {
        let output = render_plain(
            RenderConfig::with_fixes(OutputFormat::Text, false),
            &sample_report(),
        );
        assert!(!output.contains("Available anchors"));
    }

    #[test]
    fn test_render_text_shows_suggestions_with_fix() {
        let output = render_plain(
            RenderConfig::with_fixes(OutputFormat::Text, true),
            &sample_report(),
        );
        assert!(output.contains("    -> Available anchors: intro, usage\n"));
    }

    #[test]
    fn test_render_json() {
        let output = render_plain(
            RenderConfig::with_fixes(OutputFormat::Json, false),
            &sample_report(),
        );
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let items = value.as_array().unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["category"], "missing-anchor");
        assert_eq!(items[1]["suggestion"], serde_json::Value::Null);
    }

    #[test]
    fn test_render_json_empty() {
        let output = render_plain(
            RenderConfig::with_fixes(OutputFormat::Json, false),
            &Report::new(0),
        );
        assert_eq!(output.trim(), "[]");
    }
}
