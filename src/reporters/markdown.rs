//! Markdown error report
//!
//! One section per (gold, predicted) mismatch group, one subsection per
//! language with its scores, then a pipe table of the language's concepts,
//! normalized forms and the colexified target per evidence system.

use crate::classifier::{format_rate, AnalysisReport, ErrorEntry};
use anyhow::Result;
use chrono::Local;

/// Render the error evidence report as GitHub-flavored Markdown
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    if report.errors.is_empty() {
        md.push_str("No mismatches between predicted and gold bases.\n");
        return Ok(md);
    }

    for group in &report.errors {
        md.push_str(&format!("# {} / {}\n\n", group.gold, group.predicted));
        for entry in &group.entries {
            md.push_str(&render_entry(entry, &report.evidence_systems));
            md.push('\n');
        }
    }

    Ok(md)
}

fn render_header(report: &AnalysisReport) -> String {
    let acc = &report.accuracy;
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        "<!-- numeralbank error report, generated {} -->\n\
         <!-- compared: {} | exact: {} | mixed: {} | errors: {} -->\n",
        timestamp,
        acc.compared,
        format_rate(acc.exact_rate),
        format_rate(acc.mixed_rate),
        report.error_count()
    )
}

fn render_entry(entry: &ErrorEntry, systems: &[String]) -> String {
    let mut md = format!(
        "## {} / {} / {}\n\n",
        entry.language_id, entry.language_name, entry.scores
    );

    md.push_str("| Concept | Forms |");
    for system in systems {
        md.push_str(&format!(" {} |", system));
    }
    md.push('\n');
    md.push_str("| --- | --- |");
    for _ in systems {
        md.push_str(" --- |");
    }
    md.push('\n');

    for row in &entry.evidence {
        md.push_str(&format!("| {} | {} |", row.concept, escape_pipes(&row.forms)));
        for target in &row.targets {
            md.push_str(&format!(" {} |", target));
        }
        md.push('\n');
    }
    md
}

fn escape_pipes(s: &str) -> String {
    s.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_markdown_sections() {
        let md = render(&test_report()).expect("render markdown");
        assert!(md.contains("# decimal / Fiver\n"));
        assert!(md.contains("## tak / Takia / Fiver:1.00 Tener:0.00 Twentier:0.00 Twoer:0.00\n"));
        assert!(md.contains("| Concept | Forms | Fiver | Twoer | Tener | Twentier |\n"));
        assert!(md.contains("| ONE | tak | SIX |  |  |  |\n"));
        assert!(md.contains("| SIX | taklim / limtak |  |  |  |  |\n"));
    }

    #[test]
    fn test_markdown_header_reports_rates() {
        let mut report = test_report();
        report.accuracy = Default::default();
        let md = render(&report).expect("render markdown");
        assert!(md.starts_with("<!-- numeralbank error report, generated "));
        assert!(md.contains("exact: no data"));
    }

    #[test]
    fn test_markdown_without_errors() {
        let mut report = test_report();
        report.errors.clear();
        let md = render(&report).expect("render markdown");
        assert!(md.contains("No mismatches"));
        assert!(!md.contains("| Concept |"));
    }
}
