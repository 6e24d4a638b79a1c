//! CLI command definitions and handlers

mod align;
mod analyze;
mod init;

use crate::config::MAX_WORKERS;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > MAX_WORKERS {
        Err(format!("workers cannot exceed {}", MAX_WORKERS))
    } else {
        Ok(n)
    }
}

/// numeralbank - Numeral base classification from colexifications
#[derive(Parser, Debug)]
#[command(name = "numeralbank")]
#[command(
    version,
    about = "Infer the base of numeral systems from partial colexifications",
    long_about = "numeralbank scores how often number words of a language contain \
each other (e.g. 'one' inside 'six' for a quinary system), picks the best base \
system per language and compares it with the base annotated in the source data.",
    after_help = "\
Examples:
  numeralbank analyze --wordlist languages.json --concepts concepts.json --relations relations.json
  numeralbank analyze ... --format json -o report.json   Full report as JSON
  numeralbank analyze ... --errors errors.md             Also write the error evidence report
  numeralbank align tak taklim                           Shared stem of two forms
  numeralbank init                                       Write an example numeralbank.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Number of parallel workers (1-64, default: config or 8)
    #[arg(long, global = true, value_parser = parse_workers)]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify the numeral base of every language in a wordlist
    Analyze(AnalyzeArgs),

    /// Locally align two forms and print their shared stem length
    Align {
        /// First form
        a: String,
        /// Second form
        b: String,
    },

    /// Write an example numeralbank.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Wordlist JSON with the candidate languages
    #[arg(long, short = 'w')]
    pub wordlist: PathBuf,

    /// Master concept list JSON
    #[arg(long, short = 'c')]
    pub concepts: PathBuf,

    /// Relation table JSON (system -> partial colexification triples)
    #[arg(long, short = 'r')]
    pub relations: PathBuf,

    /// Config file (default: ./numeralbank.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format: text, json, markdown (or md)
    #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
    pub format: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Also write the markdown error evidence report to this path
    #[arg(long)]
    pub errors: Option<PathBuf>,
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze(args) => analyze::run(&args, cli.workers),
        Commands::Align { a, b } => align::run(&a, &b),
        Commands::Init { force } => init::run(&std::env::current_dir()?, force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workers() {
        assert_eq!(parse_workers("1"), Ok(1));
        assert_eq!(parse_workers("64"), Ok(64));
        assert!(parse_workers("0").is_err());
        assert!(parse_workers("65").is_err());
        assert!(parse_workers("many").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "numeralbank",
            "--workers",
            "2",
            "analyze",
            "-w",
            "w.json",
            "-c",
            "c.json",
            "-r",
            "r.json",
            "--format",
            "md",
        ])
        .expect("parse");
        assert_eq!(cli.workers, Some(2));
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.wordlist, PathBuf::from("w.json"));
                assert_eq!(args.format.as_deref(), Some("md"));
                assert!(args.errors.is_none());
            }
            other => panic!("expected analyze, got {:?}", other),
        }
    }

    #[test]
    fn test_analyze_requires_inputs() {
        assert!(Cli::try_parse_from(["numeralbank", "analyze", "-w", "w.json"]).is_err());
    }
}
