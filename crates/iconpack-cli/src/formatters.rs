//! Output formatters for the build report.
//!
//! JSON for machine parsing, plain text for scripts, and colored text for
//! terminals.

use crate::build::BuildReport;
use anyhow::Result;
use colored::Colorize;
use iconpack_core::cli::OutputFormat;

/// Formats a build report according to the requested output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use iconpack_cli::build::{BuildReport, CategoryReport};
/// use iconpack_cli::formatters::format_report;
/// use iconpack_core::cli::OutputFormat;
///
/// let report = BuildReport {
///     package: "react".to_string(),
///     output_dir: "react".to_string(),
///     categories: vec![CategoryReport { category: "maps".to_string(), icons: 3 }],
///     files_written: 30,
///     elapsed_ms: 12,
/// };
///
/// let output = format_report(&report, OutputFormat::Json)?;
/// assert!(output.contains("\"files_written\": 30"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_report(report: &BuildReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(text(report)),
        OutputFormat::Pretty => Ok(pretty(report)),
    }
}

fn text(report: &BuildReport) -> String {
    let mut lines = Vec::with_capacity(report.categories.len() + 1);
    lines.push(format!(
        "package={} icons={} files={} elapsed_ms={}",
        report.package,
        report.icon_count(),
        report.files_written,
        report.elapsed_ms
    ));
    for category in &report.categories {
        lines.push(format!("{}\t{}", category.category, category.icons));
    }
    lines.join("\n")
}

fn pretty(report: &BuildReport) -> String {
    let width = report
        .categories
        .iter()
        .map(|c| c.category.len())
        .max()
        .unwrap_or_default();

    let mut lines = Vec::with_capacity(report.categories.len() + 2);
    lines.push(format!(
        "{} Built {} package in {}",
        "✓".green().bold(),
        report.package.bold(),
        report.output_dir.cyan()
    ));
    for category in &report.categories {
        let icons = if category.icons == 0 {
            "no icons".dimmed().to_string()
        } else {
            format!("{} icons", category.icons.to_string().yellow())
        };
        lines.push(format!("  {:<width$}  {icons}", category.category.blue()));
    }
    lines.push(format!(
        "{} icons, {} files in {} ms",
        report.icon_count().to_string().yellow(),
        report.files_written.to_string().yellow(),
        report.elapsed_ms.to_string().cyan()
    ));
    lines.join("\n")
}
