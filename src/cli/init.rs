//! Init command - write an example project configuration

use crate::config::{CONFIG_FILENAME, EXAMPLE_CONFIG};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run(dir: &Path, force: bool) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() && !force {
        println!(
            "{} Already initialized at {} (use --force to overwrite)",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    Ok(())
}
