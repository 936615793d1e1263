//! Typed projection request

use serde::{Deserialize, Serialize};

/// Goal balance used when a request does not name one
pub const DEFAULT_TARGET: f64 = 1_000_000.0;

/// How the nominal rate is converted to an effective monthly rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateBasis {
    /// Nominal rate is per year; converted geometrically to a monthly equivalent
    #[default]
    Annual,
    /// Nominal rate is already per month
    Monthly,
}

impl RateBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateBasis::Annual => "annual",
            RateBasis::Monthly => "monthly",
        }
    }
}

/// Unit of a horizon count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodUnit {
    Months,
    #[default]
    Years,
}

/// Projection horizon: a count of months or years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    pub count: u32,
    pub unit: PeriodUnit,
}

impl Horizon {
    pub fn months(count: u32) -> Self {
        Self { count, unit: PeriodUnit::Months }
    }

    pub fn years(count: u32) -> Self {
        Self { count, unit: PeriodUnit::Years }
    }
}

/// Which problem the engine solves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationMode {
    /// Forward projection over the horizon
    Project,
    /// Simulate until the target is reached (horizon ignored)
    #[default]
    SolveTimeToTarget,
    /// Solve the monthly contribution that reaches the target at the horizon
    SolveContributionForTarget,
}

/// A validated set of projection parameters
///
/// Amounts are in currency units; `nominal_rate` is a percentage (8.0 = 8%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Starting balance at month 0
    pub initial_capital: f64,

    /// End-of-month contribution (replaced by the solved value in
    /// `SolveContributionForTarget` mode)
    pub monthly_contribution: f64,

    /// Rate as a percentage
    pub nominal_rate: f64,

    /// Whether `nominal_rate` is annual or monthly
    pub rate_basis: RateBasis,

    /// Projection horizon
    pub horizon: Horizon,

    /// Calculation mode
    pub mode: CalculationMode,

    /// Goal balance for the solve modes and for the target-reached month
    pub target: f64,
}

impl ProjectionInput {
    /// Forward projection with an annual rate and a target of 1,000,000
    pub fn new(
        initial_capital: f64,
        monthly_contribution: f64,
        nominal_rate: f64,
        horizon: Horizon,
    ) -> Self {
        Self {
            initial_capital,
            monthly_contribution,
            nominal_rate,
            rate_basis: RateBasis::Annual,
            horizon,
            mode: CalculationMode::Project,
            target: DEFAULT_TARGET,
        }
    }

    pub fn with_mode(mut self, mode: CalculationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_rate_basis(mut self, rate_basis: RateBasis) -> Self {
        self.rate_basis = rate_basis;
        self
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }
}

impl Default for ProjectionInput {
    /// Starting values of the calculator form
    fn default() -> Self {
        Self {
            initial_capital: 1000.0,
            monthly_contribution: 1000.0,
            nominal_rate: 8.0,
            rate_basis: RateBasis::Annual,
            horizon: Horizon::years(26),
            mode: CalculationMode::SolveTimeToTarget,
            target: DEFAULT_TARGET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let input = ProjectionInput::new(0.0, 500.0, 1.0, Horizon::months(10))
            .with_mode(CalculationMode::SolveContributionForTarget)
            .with_rate_basis(RateBasis::Monthly)
            .with_target(50_000.0);

        assert_eq!(input.mode, CalculationMode::SolveContributionForTarget);
        assert_eq!(input.rate_basis, RateBasis::Monthly);
        assert_eq!(input.target, 50_000.0);
        assert_eq!(input.horizon, Horizon::months(10));
    }

    #[test]
    fn test_enum_wire_names() {
        let json = serde_json::to_string(&CalculationMode::SolveTimeToTarget).unwrap();
        assert_eq!(json, "\"SOLVE_TIME_TO_TARGET\"");

        let basis: RateBasis = serde_json::from_str("\"MONTHLY\"").unwrap();
        assert_eq!(basis, RateBasis::Monthly);
    }

    #[test]
    fn test_enum_defaults_match_form() {
        assert_eq!(RateBasis::default(), RateBasis::Annual);
        assert_eq!(PeriodUnit::default(), PeriodUnit::Years);
        assert_eq!(CalculationMode::default(), CalculationMode::SolveTimeToTarget);
    }
}
