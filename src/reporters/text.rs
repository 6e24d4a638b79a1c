//! Text (terminal) reporter with colors and formatting

use crate::classifier::{format_rate, AnalysisReport};
use anyhow::Result;
use std::collections::BTreeMap;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Rate colors (ANSI escape codes)
fn rate_color(rate: Option<f64>) -> &'static str {
    match rate {
        Some(r) if r >= 0.8 => "\x1b[32m", // Green
        Some(r) if r >= 0.5 => "\x1b[33m", // Yellow
        Some(_) => "\x1b[31m",             // Red
        None => "\x1b[90m",                // Gray
    }
}

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();
    let acc = &report.accuracy;

    out.push_str(&format!("\n{BOLD}Numeral Base Classification{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Languages: {}  Forms: {}  Compared: {}\n\n",
        report.languages.len(),
        report.forms.len(),
        acc.compared
    ));

    // Accuracy
    out.push_str(&format!("{BOLD}ACCURACY{RESET}\n"));
    out.push_str(&format!(
        "  Exact: {}{}{RESET}  ({} hits, {} fails)\n",
        rate_color(acc.exact_rate),
        format_rate(acc.exact_rate),
        acc.exact_hits,
        acc.exact_fails
    ));
    out.push_str(&format!(
        "  Mixed: {}{}{RESET}  ({:.2} credit, {} fails)\n\n",
        rate_color(acc.mixed_rate),
        format_rate(acc.mixed_rate),
        acc.mixed_credit,
        acc.mixed_fails
    ));

    // Predicted base distribution
    let mut predicted: BTreeMap<&str, usize> = BTreeMap::new();
    for lang in &report.languages {
        *predicted.entry(lang.best_base.as_str()).or_default() += 1;
    }
    if !predicted.is_empty() {
        out.push_str(&format!("{BOLD}PREDICTED BASES{RESET}\n"));
        for (base, count) in &predicted {
            out.push_str(&format!("  {:<12} {}\n", base, count));
        }
        out.push('\n');
    }

    // Mismatches
    if report.errors.is_empty() {
        out.push_str(&format!("{DIM}No mismatches{RESET}\n"));
    } else {
        out.push_str(&format!(
            "{BOLD}MISMATCHES{RESET} ({} total)\n",
            report.error_count()
        ));
        for group in &report.errors {
            out.push_str(&format!(
                "  {:10} / {:10} : {}\n",
                group.gold,
                group.predicted,
                group.entries.len()
            ));
        }
    }

    Ok(out)
}
