//! Export command - dated CSV and Markdown reports

use super::{current_config, estimate, write_output, FormArgs};
use anyhow::Result;
use console::style;
use ecostep::models::Estimate;
use ecostep::reporters::{self, OutputFormat, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::info;

/// Formats written by an export, in order
const EXPORT_FORMATS: [OutputFormat; 2] = [OutputFormat::Csv, OutputFormat::Markdown];

/// Write `carbon_report_<date>.csv` and `.md` into `dir`
pub(crate) fn write_reports(estimate: &Estimate, dir: &Path) -> Result<Vec<PathBuf>> {
    let opts = RenderOptions {
        color: false,
        ..RenderOptions::today()
    };

    let mut written = Vec::with_capacity(EXPORT_FORMATS.len());
    for format in EXPORT_FORMATS {
        let path = dir.join(reporters::export_file_name(format, opts.date));
        let content = reporters::report_with_format(estimate, format, &opts)?;
        write_output(&path, &content)?;
        info!("Exported {} report to {}", format, path.display());
        written.push(path);
    }
    Ok(written)
}

pub(crate) fn print_written(paths: &[PathBuf]) {
    for path in paths {
        println!("{} Wrote {}", style("✓").green(), style(path.display()).cyan());
    }
}

/// Run the export command
pub fn run(form: &FormArgs, dir: &Path) -> Result<()> {
    let estimate = estimate::compute(form, &current_config())?;
    let written = write_reports(&estimate, dir)?;
    print_written(&written);
    Ok(())
}
