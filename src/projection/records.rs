//! Projection output structures

use serde::{Deserialize, Serialize};

use crate::input::CalculationMode;

/// Balance at the end of one simulated month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Month index (0 = initial state)
    pub month: u32,
    /// Total balance
    pub total: f64,
    /// Initial capital plus contributions to date
    pub contributed: f64,
    /// Interest credited during this month
    pub interest: f64,
    /// Interest accumulated to date (`total - contributed`)
    pub cumulative_interest: f64,
}

/// One row of the annual breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Year index (1-based)
    pub year: u32,
    /// Months covered by this row (12, or fewer for a final partial year)
    pub months: u32,
    pub annual_contribution: f64,
    pub annual_interest: f64,
    pub total_contributed: f64,
    pub total_interest: f64,
    pub total_accumulated: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Mode the result was computed for
    pub mode: CalculationMode,

    /// Effective monthly rate used for compounding
    pub monthly_rate: f64,

    /// Contribution applied every month (solved or echoed from the input)
    pub monthly_contribution: f64,

    /// Solved contribution, only for `SolveContributionForTarget`
    pub required_monthly_contribution: Option<f64>,

    pub final_total: f64,
    pub total_invested: f64,
    pub total_interest: f64,

    /// Interest as a percentage of the amount invested (0 when nothing invested)
    pub power_factor: f64,

    /// First month the balance met the target; `None` if never within the
    /// simulated range
    pub target_reached_in_months: Option<u32>,

    /// Month records from month 0 to the last simulated month
    pub history: Vec<MonthRecord>,

    pub yearly_breakdown: Vec<YearRecord>,
}

impl ProjectionResult {
    /// Number of months actually simulated (excluding month 0)
    pub fn simulated_months(&self) -> u32 {
        self.history.last().map(|r| r.month).unwrap_or(0)
    }

    /// Factor by which interest multiplied the invested capital
    pub fn growth_multiple(&self) -> f64 {
        self.power_factor / 100.0 + 1.0
    }

    pub fn target_reached(&self) -> bool {
        self.target_reached_in_months.is_some()
    }
}

/// Interest as a percentage of invested capital
pub fn power_factor(total_interest: f64, total_invested: f64) -> f64 {
    if total_invested > 0.0 {
        total_interest / total_invested * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_factor_zero_invested() {
        assert_eq!(power_factor(0.0, 0.0), 0.0);
        assert_eq!(power_factor(150.0, 0.0), 0.0);
        assert_eq!(power_factor(10.0, -100.0), 0.0);
    }

    #[test]
    fn test_power_factor_percentage() {
        assert_eq!(power_factor(250.0, 1000.0), 25.0);
        assert_eq!(power_factor(-100.0, 1000.0), -10.0);
    }
}
