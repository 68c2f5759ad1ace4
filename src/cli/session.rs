//! Session command - line-oriented interactive form

use super::{current_config, export};
use anyhow::Result;
use console::style;
use ecostep::input::CategoryPolicy;
use ecostep::models::Estimate;
use ecostep::reporters::{self, OutputFormat, RenderOptions};
use ecostep::session::{Outcome, Session, HELP};
use std::io::{BufRead, Write};
use std::path::Path;

fn show(estimate: &Estimate, opts: &RenderOptions) -> Result<()> {
    print!(
        "{}",
        reporters::report_with_format(estimate, OutputFormat::Text, opts)?
    );
    Ok(())
}

/// Run the interactive session on stdin
pub fn run(policy: Option<&str>) -> Result<()> {
    let config = current_config();
    let policy: CategoryPolicy = match policy {
        Some(p) => p.parse()?,
        None => config.input.category_policy,
    };
    let mut session = Session::new(config.defaults.raw_input(), policy);
    let opts = RenderOptions {
        color: !config.output.no_color && console::colors_enabled(),
        ..RenderOptions::today()
    };

    show(&session.estimate()?, &opts)?;
    println!(
        "\n{} Type {} for commands, {} to leave.",
        style("🌿").bold(),
        style("help").cyan(),
        style("quit").cyan()
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", style(">").green().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match session.apply_line(&line) {
            Ok(Outcome::Updated(estimate)) => show(&estimate, &opts)?,
            Ok(Outcome::Tip(category, tip)) => {
                println!("{} {}: {}", style("💡").bold(), style(category).bold(), tip);
            }
            Ok(Outcome::Export { dir, estimate }) => {
                let dir = dir.unwrap_or_else(|| Path::new(".").to_path_buf());
                match export::write_reports(&estimate, &dir) {
                    Ok(written) => export::print_written(&written),
                    Err(e) => eprintln!("{} {:#}", style("error:").red().bold(), e),
                }
            }
            Ok(Outcome::Help) => println!("{}", HELP),
            Ok(Outcome::Quit) => break,
            Err(e) => eprintln!("{} {}", style("error:").red().bold(), e),
        }
    }

    println!();
    Ok(())
}
