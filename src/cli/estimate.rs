//! Estimate command - compute one day's footprint and render it

use super::{current_config, write_output, FormArgs};
use anyhow::{Context, Result};
use console::style;
use ecostep::config::ProjectConfig;
use ecostep::estimator;
use ecostep::models::Estimate;
use ecostep::reporters::{self, OutputFormat, RenderOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Build the estimate from config defaults overlaid with `form`
pub(crate) fn compute(form: &FormArgs, config: &ProjectConfig) -> Result<Estimate> {
    let policy = form.policy(config)?;
    let raw = form.apply(config.defaults.raw_input());
    let snapshot = raw
        .to_snapshot(policy)
        .context("Invalid input (see `ecostep estimate --help` for accepted values)")?;
    Ok(estimator::estimate(&snapshot)?)
}

/// Run the estimate command
pub fn run(
    form: &FormArgs,
    format: Option<&str>,
    output: Option<&Path>,
    no_color: bool,
) -> Result<()> {
    let config = current_config();
    let estimate = compute(form, &config)?;

    let format = OutputFormat::from_str(format.unwrap_or(config.output.format.as_str()))?;
    let color = !no_color
        && !config.output.no_color
        && output.is_none()
        && console::colors_enabled();
    let opts = RenderOptions {
        color,
        ..RenderOptions::today()
    };

    let rendered = reporters::report_with_format(&estimate, format, &opts)?;

    match output {
        Some(path) => {
            write_output(path, &rendered)?;
            info!("Wrote {} report to {}", format, path.display());
            eprintln!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => print!("{}", ensure_newline(rendered)),
    }

    Ok(())
}

fn ensure_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
