//! Init command - write an example ecostep.toml

use anyhow::{Context, Result};
use console::style;
use ecostep::config::init_config;
use std::path::Path;

/// Run the init command
pub fn run(dir: &Path) -> Result<()> {
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", dir.display()))?;

    let (path, created) = init_config(&dir)?;
    if created {
        println!(
            "{} Created {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
        println!("\nEdit it to change the starting form values, category policy or output format.");
    } else {
        println!(
            "{} Config already exists at {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }
    Ok(())
}
