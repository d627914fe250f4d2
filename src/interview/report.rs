//! Line-oriented view of a generated report.
//!
//! The report is never parsed as markdown. Each line is classified on its own
//! by its leading characters, which is all a front end needs to lay it out.

/// Shown under every report.
pub const REPORT_NOTICE: &str = "Notice: This report is synthesized by an AI model. \
While it provides lifestyle insights, it is not a clinical diagnosis. \
Always consult with a qualified healthcare provider regarding medical conditions.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// `## ` / `### ` section title, hashes stripped.
    Heading(String),
    /// `**Label:** value` line, asterisks stripped.
    Emphasis(String),
    /// `- item`, first dash stripped.
    Bullet(String),
    Paragraph(String),
}

/// Classify every non-blank line of `report`.
pub fn classify_lines(report: &str) -> Vec<ReportLine> {
    report.lines().filter_map(classify_line).collect()
}

fn classify_line(line: &str) -> Option<ReportLine> {
    if line.starts_with("## ") || line.starts_with("### ") {
        Some(ReportLine::Heading(line.replace('#', "").trim().to_string()))
    } else if line.starts_with("**") && line.contains(':') {
        Some(ReportLine::Emphasis(line.replace("**", "")))
    } else if line.trim().starts_with("- ") {
        Some(ReportLine::Bullet(line.replacen("- ", "", 1)))
    } else if !line.trim().is_empty() {
        Some(ReportLine::Paragraph(line.to_string()))
    } else {
        None
    }
}
