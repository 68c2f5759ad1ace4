//! Errors raised at the estimator's input boundary

use crate::models::Appliance;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("Unknown {kind} '{value}'. Valid values: {expected}")]
    InvalidCategory {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("Missing hours for appliance: {0}")]
    MissingAppliance(Appliance),

    #[error("Invalid {field}: {value} (must be a finite number)")]
    InvalidNumber { field: String, value: f64 },
}

pub type EstimateResult<T> = Result<T, EstimateError>;
