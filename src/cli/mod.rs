//! CLI command definitions and handlers

mod estimate;
mod export;
mod factors;
mod init;
mod session;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ecostep::config::{load_config, ProjectConfig};
use ecostep::input::{CategoryPolicy, RawInput};
use ecostep::models::Appliance;
use std::path::{Path, PathBuf};

/// EcoStep - daily carbon footprint calculator
#[derive(Parser, Debug)]
#[command(name = "ecostep")]
#[command(
    version,
    about = "Estimate today's carbon footprint from fuel, appliance use and diet",
    long_about = "EcoStep converts a day's fuel, household electricity and diet into kg CO2e, \
grades the total (Low below 12 kg, High above 50 kg) and shows where it comes from.\n\n\
Run without a subcommand to estimate with your configured defaults:\n  \
ecostep",
    after_help = "\
Examples:
  ecostep                                       Dashboard for the default day
  ecostep estimate --fuel diesel --litres 6     Override today's fuel
  ecostep estimate --diet vegetarian -f json    JSON output for scripting
  ecostep estimate -f html -o today.html        Standalone HTML dashboard
  ecostep export --dir reports                  Dated CSV and Markdown reports
  ecostep session                               Interactive form
  ecostep factors                               Emission factors and sources"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Form values given on the command line. Anything left out comes from the
/// config defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct FormArgs {
    /// Vehicle fuel: petrol, diesel, none
    #[arg(long)]
    pub fuel: Option<String>,
    /// Litres of fuel used today (0-80)
    #[arg(long, alias = "liters")]
    pub litres: Option<f64>,
    /// AC (1.5 Ton) hours (0-18)
    #[arg(long)]
    pub ac: Option<f64>,
    /// TV (LED) hours (0-16)
    #[arg(long)]
    pub tv: Option<f64>,
    /// Laptop hours (0-16)
    #[arg(long)]
    pub laptop: Option<f64>,
    /// Lights (LED) hours (0-24)
    #[arg(long)]
    pub lights: Option<f64>,
    /// Diet: high-meat, mixed, vegetarian
    #[arg(long)]
    pub diet: Option<String>,
    /// Unknown fuel/diet handling: strict (error) or zero-fallback (count as 0)
    #[arg(long, env = "ECOSTEP_CATEGORY_POLICY", value_parser = ["strict", "zero-fallback"])]
    pub policy: Option<String>,
}

impl FormArgs {
    /// Overlay the flags that were given onto the configured form
    pub fn apply(&self, mut form: RawInput) -> RawInput {
        if let Some(fuel) = &self.fuel {
            form.fuel = fuel.clone();
        }
        if let Some(litres) = self.litres {
            form.litres = litres;
        }
        for (appliance, hours) in [
            (Appliance::Ac, self.ac),
            (Appliance::Tv, self.tv),
            (Appliance::Laptop, self.laptop),
            (Appliance::Lights, self.lights),
        ] {
            if let Some(hours) = hours {
                form.hours.insert(appliance.label().to_string(), hours);
            }
        }
        if let Some(diet) = &self.diet {
            form.diet = diet.clone();
        }
        form
    }

    /// Flag (or env) first, then config
    pub fn policy(&self, config: &ProjectConfig) -> Result<CategoryPolicy> {
        match &self.policy {
            Some(p) => Ok(p.parse()?),
            None => Ok(config.input.category_policy),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute today's footprint and show it (default command)
    #[command(after_help = "\
Examples:
  ecostep estimate                                   Default day as a dashboard
  ecostep estimate --fuel none --diet vegetarian     Car-free, plant-based day
  ecostep estimate --ac 8 --lights 12                Heavier electricity use
  ecostep estimate -f csv                            Category totals as CSV
  ecostep estimate -f markdown -o report.md          Markdown report to a file
  ecostep estimate --diet keto --policy zero-fallback   Count unknown diets as 0")]
    Estimate {
        #[command(flatten)]
        form: FormArgs,
        /// Output format: text, json, markdown (or md), csv, html
        #[arg(long, short = 'f', env = "ECOSTEP_FORMAT", value_parser = ["text", "json", "markdown", "md", "csv", "html"])]
        format: Option<String>,
        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Disable colors in text output
        #[arg(long)]
        no_color: bool,
    },
    /// Write dated CSV and Markdown reports (carbon_report_<date>.csv / .md)
    Export {
        #[command(flatten)]
        form: FormArgs,
        /// Directory to write the reports into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Interactive form: change one value at a time and watch the total move
    Session {
        /// Unknown fuel/diet handling: strict (error) or zero-fallback (count as 0)
        #[arg(long, env = "ECOSTEP_CATEGORY_POLICY", value_parser = ["strict", "zero-fallback"])]
        policy: Option<String>,
    },
    /// Print the emission factors and their sources
    Factors,
    /// Write an example ecostep.toml into the current directory
    Init,
}

/// Config for the current directory
fn current_config() -> ProjectConfig {
    load_config(Path::new("."))
}

/// Write `content` to `path`, creating parent directories
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => estimate::run(&FormArgs::default(), None, None, false),

        Some(Commands::Estimate {
            form,
            format,
            output,
            no_color,
        }) => estimate::run(&form, format.as_deref(), output.as_deref(), no_color),

        Some(Commands::Export { form, dir }) => export::run(&form, &dir),

        Some(Commands::Session { policy }) => session::run(policy.as_deref()),

        Some(Commands::Factors) => factors::run(),

        Some(Commands::Init) => init::run(Path::new(".")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["ecostep"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_form_flags_override_config() {
        let cli = Cli::try_parse_from([
            "ecostep", "estimate", "--fuel", "diesel", "--tv", "5", "--diet", "vegan",
        ])
        .unwrap();
        let Some(Commands::Estimate { form, .. }) = cli.command else {
            panic!("expected estimate");
        };
        let raw = form.apply(ProjectConfig::default().defaults.raw_input());
        assert_eq!(raw.fuel, "diesel");
        assert_eq!(raw.litres, 3.0);
        assert_eq!(raw.hours.get("TV (LED)"), Some(&5.0));
        assert_eq!(raw.hours.len(), 4);
        assert_eq!(raw.diet, "vegan");
    }

    #[test]
    fn test_policy_flag_beats_config() {
        let mut config = ProjectConfig::default();
        config.input.category_policy = CategoryPolicy::ZeroFallback;
        let form = FormArgs {
            policy: Some("strict".into()),
            ..FormArgs::default()
        };
        assert_eq!(form.policy(&config).unwrap(), CategoryPolicy::Strict);
        assert_eq!(
            FormArgs::default().policy(&config).unwrap(),
            CategoryPolicy::ZeroFallback
        );
    }

    #[test]
    fn test_bad_format_rejected() {
        assert!(Cli::try_parse_from(["ecostep", "estimate", "-f", "sarif"]).is_err());
    }
}
