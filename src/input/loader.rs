//! Coerce loosely-typed form fields into a `ProjectionInput`
//!
//! Numeric fields may arrive either as JSON numbers or as the raw text of an
//! editable field. Anything that does not parse as a finite number becomes 0;
//! malformed numbers never produce an error.

use super::data::{CalculationMode, Horizon, PeriodUnit, ProjectionInput, RateBasis, DEFAULT_TARGET};
use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A numeric field as it arrives from a form: number or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    /// Numeric value, 0 when the field is empty or unparsable
    pub fn value(&self) -> f64 {
        match self {
            NumericField::Number(n) if n.is_finite() => *n,
            NumericField::Number(_) => 0.0,
            NumericField::Text(s) => coerce_number(s),
        }
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        NumericField::Number(value)
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        NumericField::Text(value.to_string())
    }
}

/// Parse form text as a number; empty, unparsable and non-finite text is 0
pub fn coerce_number(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Convert a fractional horizon count into a `Horizon`
///
/// Partial periods round up to a whole month; negative counts become 0.
pub fn coerce_horizon(count: f64, unit: PeriodUnit) -> Horizon {
    let count = if count.is_finite() { count.max(0.0) } else { 0.0 };
    match unit {
        PeriodUnit::Months => Horizon::months(count.ceil() as u32),
        PeriodUnit::Years if count.fract() == 0.0 => Horizon::years(count as u32),
        PeriodUnit::Years => Horizon::months((count * 12.0).ceil() as u32),
    }
}

fn default_initial_capital() -> NumericField { NumericField::Number(1000.0) }
fn default_monthly_contribution() -> NumericField { NumericField::Number(1000.0) }
fn default_nominal_rate() -> NumericField { NumericField::Number(8.0) }
fn default_horizon_count() -> NumericField { NumericField::Number(26.0) }
fn default_target() -> NumericField { NumericField::Number(DEFAULT_TARGET) }

/// Untyped request as submitted by a form or an HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProjectionInput {
    #[serde(default = "default_initial_capital", alias = "initialValue")]
    pub initial_capital: NumericField,

    #[serde(default = "default_monthly_contribution", alias = "monthlyContribution")]
    pub monthly_contribution: NumericField,

    #[serde(default = "default_nominal_rate", alias = "annualInterestRate")]
    pub nominal_rate: NumericField,

    #[serde(default)]
    pub rate_basis: RateBasis,

    #[serde(default = "default_horizon_count", alias = "years")]
    pub horizon_count: NumericField,

    #[serde(default)]
    pub horizon_unit: PeriodUnit,

    #[serde(default)]
    pub mode: CalculationMode,

    #[serde(default = "default_target")]
    pub target: NumericField,
}

impl Default for RawProjectionInput {
    fn default() -> Self {
        Self {
            initial_capital: default_initial_capital(),
            monthly_contribution: default_monthly_contribution(),
            nominal_rate: default_nominal_rate(),
            rate_basis: RateBasis::default(),
            horizon_count: default_horizon_count(),
            horizon_unit: PeriodUnit::default(),
            mode: CalculationMode::default(),
            target: default_target(),
        }
    }
}

impl RawProjectionInput {
    /// Coerce every field into a typed `ProjectionInput`
    pub fn to_input(&self) -> ProjectionInput {
        ProjectionInput {
            initial_capital: self.initial_capital.value(),
            monthly_contribution: self.monthly_contribution.value(),
            nominal_rate: self.nominal_rate.value(),
            rate_basis: self.rate_basis,
            horizon: coerce_horizon(self.horizon_count.value(), self.horizon_unit),
            mode: self.mode,
            target: self.target.value(),
        }
    }
}

/// Parse a JSON request body
///
/// Malformed JSON and unknown enum values are `InvalidRequest`; malformed
/// numbers are not errors and coerce to 0.
pub fn parse_request(json: &str) -> Result<RawProjectionInput> {
    serde_json::from_str(json).map_err(invalid_request)
}

/// Load a JSON request from a file
pub fn load_request(path: &Path) -> Result<RawProjectionInput> {
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(invalid_request)
}

fn invalid_request(e: serde_json::Error) -> ProjectionError {
    if e.is_io() {
        ProjectionError::Json(e)
    } else {
        ProjectionError::InvalidRequest(e.to_string())
    }
}
