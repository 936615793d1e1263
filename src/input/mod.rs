//! Projection request types and form-input coercion

mod data;
pub mod loader;

pub use data::{CalculationMode, Horizon, PeriodUnit, ProjectionInput, RateBasis, DEFAULT_TARGET};
pub use loader::{coerce_number, load_request, parse_request, NumericField, RawProjectionInput};
