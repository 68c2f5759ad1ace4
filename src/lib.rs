//! EcoStep - daily carbon footprint calculator
//!
//! Converts a day's fuel, appliance use and diet into kg CO2e, grades the
//! total and renders it as a terminal dashboard or exportable report.
//!
//! ```
//! use ecostep::estimator::estimate;
//! use ecostep::models::{Grade, InputSnapshot};
//!
//! let est = estimate(&InputSnapshot::default()).unwrap();
//! assert_eq!(est.result.grade, Grade::Low);
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod factors;
pub mod input;
pub mod models;
pub mod reporters;
pub mod session;

pub use error::{EstimateError, EstimateResult};
pub use estimator::estimate;
pub use input::{CategoryPolicy, RawInput};
pub use models::{Category, Estimate, FootprintResult, Grade, InputSnapshot};
