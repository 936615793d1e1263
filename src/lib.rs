//! Wealth Projection - Compound-interest projection engine with inverse solvers
//!
//! This library provides:
//! - Month-by-month projections of capital plus end-of-month contributions
//! - Annual breakdowns of contributions and interest, including partial years
//! - Time-to-target and required-contribution solvers
//! - Forgiving coercion of form-style numeric input
//! - Currency formatting, CSV/JSON export and short advisory text

pub mod error;
pub mod input;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::ProjectionError;
pub use input::{CalculationMode, Horizon, PeriodUnit, ProjectionInput, RateBasis, RawProjectionInput};
pub use projection::{compute_projection, MonthRecord, ProjectionEngine, ProjectionResult, YearRecord};
pub use scenario::ScenarioRunner;
