//! Projection engine: rate normalization, solvers, simulation and aggregation

mod state;
mod engine;
mod records;
mod rates;
mod solver;
mod yearly;

pub use state::ProjectionState;
pub use engine::{compute_projection, EngineConfig, ProjectionEngine, MAX_HORIZON_MONTHS};
pub use records::{power_factor, MonthRecord, ProjectionResult, YearRecord};
pub use rates::{annualized_rate, effective_monthly_rate, horizon_months, MAX_SIMULATION_MONTHS};
pub use solver::{annuity_factor, future_value_lump_sum, required_contribution};
pub use yearly::aggregate_years;
