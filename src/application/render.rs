use crate::domain::entities::report_result::ReportResult;
use crate::domain::error::DomainError;
use std::fmt::{self, Write as _};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown output format: {s}. Use json or markdown")),
        }
    }
}

pub fn render(report: &ReportResult, format: OutputFormat) -> Result<String, DomainError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => Ok(render_markdown(report)),
    }
}

pub fn render_markdown(report: &ReportResult) -> String {
    let mut out = String::new();
    // fmt::Write for String is infallible.
    let _ = write_markdown(&mut out, report);
    out
}

fn write_markdown(out: &mut String, report: &ReportResult) -> fmt::Result {
    writeln!(out, "# Trend Report: {}", report.topics.join(", "))?;
    writeln!(out)?;
    writeln!(out, "Report date: {}  ", report.report_date)?;
    writeln!(out, "Time frame: {}", report.time_frame.label())?;

    if report.items.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "No recent articles matched. Try a wider time frame or different topics."
        )?;
        return Ok(());
    }

    for (i, item) in report.items.iter().enumerate() {
        let source = if item.source.trim().is_empty() { "Unknown Source" } else { item.source.as_str() };
        let date = if item.date.trim().is_empty() { "N/A" } else { item.date.as_str() };

        writeln!(out)?;
        writeln!(out, "## #{} {}", i + 1, item.title)?;
        writeln!(out)?;
        writeln!(out, "*{source}* | {date}")?;
        writeln!(out)?;
        writeln!(out, "{}", item.summary)?;
        if !item.tags.is_empty() {
            let tags: Vec<String> = item.tags.iter().map(|t| format!("`{t}`")).collect();
            writeln!(out)?;
            writeln!(out, "Tags: {}", tags.join(" "))?;
        }
        writeln!(out)?;
        if item.has_link() {
            writeln!(out, "[Read the original]({})", item.url)?;
        } else {
            writeln!(out, "> Invalid link, or the source has been removed.")?;
        }
    }
    Ok(())
}

/// Render `report` and write it to `path`, replacing any existing file.
pub fn write_report(report: &ReportResult, format: OutputFormat, path: &Path) -> Result<(), DomainError> {
    let rendered = render(report, format)?;
    std::fs::write(path, rendered)
        .map_err(|e| DomainError::Io(format!("writing {}: {e}", path.display())))
}
