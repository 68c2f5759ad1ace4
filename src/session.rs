//! Interactive form state
//!
//! A [`Session`] owns the mutable form values and the category policy. Every
//! command edits a copy of the form, rebuilds a fresh [`InputSnapshot`] and
//! recomputes; the edit is committed only when that succeeds, so a rejected
//! label leaves the previous state untouched. Terminal I/O lives in the CLI.

use crate::error::EstimateError;
use crate::estimator;
use crate::input::{resolve_fuel, CategoryPolicy, RawInput};
use crate::models::{Appliance, Category, Estimate, FuelKind, InputSnapshot};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const HELP: &str = "\
Commands:
  fuel <petrol|diesel|none>        Set the vehicle fuel
  litres <n>                       Fuel used today (0-80)
  hours <ac|tv|laptop|lights> <n>  Appliance hours today
  diet <high-meat|mixed|vegetarian>
  show                             Recompute and show the dashboard
  tip                              Tip for your largest source
  export [dir]                     Write the CSV and Markdown reports
  reset                            Restore the starting values
  help                             This list
  quit                             Leave the session";

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// One parsed line of session input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fuel(String),
    Litres(f64),
    Hours(Appliance, f64),
    Diet(String),
    Show,
    Tip,
    Export(Option<PathBuf>),
    Reset,
    Help,
    Quit,
}

fn number(s: &str) -> Result<f64, CommandError> {
    s.parse::<f64>()
        .map_err(|_| CommandError::NotANumber(s.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "fuel" if !rest.is_empty() => Ok(Command::Fuel(rest.to_string())),
            "fuel" => Err(CommandError::Usage("fuel <petrol|diesel|none>")),
            "litres" | "liters" => match rest {
                "" => Err(CommandError::Usage("litres <n>")),
                n => Ok(Command::Litres(number(n)?)),
            },
            "hours" => {
                // Appliance labels may contain spaces ("TV (LED)"), so the
                // number is the last word
                let (name, n) = rest
                    .rsplit_once(char::is_whitespace)
                    .ok_or(CommandError::Usage("hours <appliance> <n>"))?;
                let appliance: Appliance = name.trim().parse()?;
                Ok(Command::Hours(appliance, number(n)?))
            }
            "diet" if !rest.is_empty() => Ok(Command::Diet(rest.to_string())),
            "diet" => Err(CommandError::Usage("diet <high-meat|mixed|vegetarian>")),
            "show" | "" => Ok(Command::Show),
            "tip" => Ok(Command::Tip),
            "export" => Ok(Command::Export(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// What the caller should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Form changed or was re-shown; here is the fresh estimate
    Updated(Estimate),
    Tip(Category, &'static str),
    Export {
        dir: Option<PathBuf>,
        estimate: Estimate,
    },
    Help,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    initial: RawInput,
    form: RawInput,
    policy: CategoryPolicy,
}

/// Key appliance hours by display label so edits replace, never duplicate
fn canonical_hours(mut form: RawInput) -> RawInput {
    let hours = std::mem::take(&mut form.hours);
    for (name, value) in hours {
        let key = match name.parse::<Appliance>() {
            Ok(appliance) => appliance.label().to_string(),
            Err(_) => name,
        };
        form.hours.insert(key, value);
    }
    form
}

impl Session {
    pub fn new(initial: RawInput, policy: CategoryPolicy) -> Self {
        let initial = canonical_hours(initial);
        Self {
            form: initial.clone(),
            initial,
            policy,
        }
    }

    pub fn form(&self) -> &RawInput {
        &self.form
    }

    pub fn policy(&self) -> CategoryPolicy {
        self.policy
    }

    pub fn snapshot(&self) -> Result<InputSnapshot, EstimateError> {
        self.form.to_snapshot(self.policy)
    }

    pub fn estimate(&self) -> Result<Estimate, EstimateError> {
        estimator::estimate(&self.snapshot()?)
    }

    /// Parse and apply one line of input
    pub fn apply_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let command: Command = line.parse()?;
        self.apply(command)
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome, CommandError> {
        debug!("Session command: {:?}", command);
        match command {
            Command::Fuel(label) => self.update(|form, policy| {
                if resolve_fuel(&label, policy)? == FuelKind::None {
                    form.litres = 0.0;
                }
                form.fuel = label;
                Ok(())
            }),
            Command::Litres(litres) => self.update(|form, _| {
                form.litres = litres;
                Ok(())
            }),
            Command::Hours(appliance, hours) => self.update(|form, _| {
                form.hours.insert(appliance.label().to_string(), hours);
                Ok(())
            }),
            Command::Diet(label) => self.update(|form, _| {
                form.diet = label;
                Ok(())
            }),
            Command::Reset => {
                self.form = self.initial.clone();
                Ok(Outcome::Updated(self.estimate()?))
            }
            Command::Show => Ok(Outcome::Updated(self.estimate()?)),
            Command::Tip => {
                let category = self.estimate()?.result.dominant_category;
                Ok(Outcome::Tip(category, category.tip()))
            }
            Command::Export(dir) => Ok(Outcome::Export {
                dir,
                estimate: self.estimate()?,
            }),
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    /// Edit a copy of the form and commit it only if it still estimates
    fn update<F>(&mut self, edit: F) -> Result<Outcome, CommandError>
    where
        F: FnOnce(&mut RawInput, CategoryPolicy) -> Result<(), EstimateError>,
    {
        let mut form = self.form.clone();
        edit(&mut form, self.policy)?;
        let estimate = estimator::estimate(&form.to_snapshot(self.policy)?)?;
        self.form = form;
        Ok(Outcome::Updated(estimate))
    }
}
