//! Analyze command - classify every language of a wordlist

use super::AnalyzeArgs;
use crate::config::load_project_config;
use crate::pipeline::{Analysis, DEFAULT_WORKERS};
use crate::relations::RelationTable;
use crate::reporters::{render_error_report, report_with_format, OutputFormat};
use crate::wordlist::{load_concept_list, JsonWordlist, WordlistSource};
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::str::FromStr;
use tracing::debug;

/// Create bar progress style
fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░  ")
}

/// Run the analyze command
pub fn run(args: &AnalyzeArgs, workers: Option<usize>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = load_project_config(args.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;

    let format_name = args
        .format
        .clone()
        .or_else(|| config.defaults.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let format = OutputFormat::from_str(&format_name)?;
    let workers = workers
        .or(config.defaults.workers)
        .unwrap_or(DEFAULT_WORKERS);

    let relations = RelationTable::load(&args.relations).with_context(|| {
        format!("Failed to load relation table {}", args.relations.display())
    })?;
    let concepts = load_concept_list(&args.concepts).context("Failed to load concept list")?;

    let source = JsonWordlist::new(&args.wordlist);
    let languages = source
        .languages()
        .with_context(|| format!("Failed to load wordlist {}", source.name()))?;
    debug!(
        "Loaded {} languages, {} concepts, {} systems",
        languages.len(),
        concepts.len(),
        relations.len()
    );

    let bar = ProgressBar::new(languages.len() as u64);
    bar.set_style(create_bar_style());
    let progress = bar.clone();

    let analysis = Analysis::new(config, relations, concepts)
        .context("Invalid configuration")?
        .with_workers(workers)
        .with_progress_callback(Box::new(move |id, done, total| {
            progress.set_length(total as u64);
            progress.set_position(done as u64);
            progress.set_message(id.to_string());
        }));

    let report = analysis.run(languages)?;
    bar.finish_and_clear();

    let output = report_with_format(&report, format)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Report written to: {}", style(path.display()).cyan());
        }
        None => println!("{}", output),
    }

    if let Some(path) = &args.errors {
        let errors = render_error_report(&report)?;
        std::fs::write(path, errors)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!(
            "Error report ({} languages) written to: {}",
            report.error_count(),
            style(path.display()).cyan()
        );
    }

    Ok(())
}
