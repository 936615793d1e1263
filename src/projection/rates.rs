//! Rate and horizon normalization

use crate::input::{Horizon, PeriodUnit, RateBasis};

/// Simulation ceiling for the time-to-target mode (100 years)
pub const MAX_SIMULATION_MONTHS: u32 = 1200;

/// Effective monthly compounding rate for a percentage rate
///
/// Annual rates use the geometric monthly equivalent `(1 + i)^(1/12) - 1`,
/// not `i / 12`. A loss of 100% or more per year floors at `r = -1`.
pub fn effective_monthly_rate(nominal_rate: f64, basis: RateBasis) -> f64 {
    let rate = nominal_rate / 100.0;
    if rate == 0.0 {
        return 0.0;
    }
    match basis {
        RateBasis::Monthly => rate,
        RateBasis::Annual => (1.0 + rate).max(0.0).powf(1.0 / 12.0) - 1.0,
    }
}

/// Annual rate produced by compounding a monthly rate 12 times
pub fn annualized_rate(monthly_rate: f64) -> f64 {
    (1.0 + monthly_rate).powi(12) - 1.0
}

/// Total month count of a horizon
pub fn horizon_months(horizon: Horizon) -> u32 {
    match horizon.unit {
        PeriodUnit::Months => horizon.count,
        PeriodUnit::Years => horizon.count.saturating_mul(12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_annual_rate_round_trip() {
        for nominal in [0.5, 3.0, 8.0, 12.0, 25.0, 100.0, -5.0] {
            let r = effective_monthly_rate(nominal, RateBasis::Annual);
            assert_abs_diff_eq!(annualized_rate(r), nominal / 100.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_annual_rate_is_geometric() {
        let r = effective_monthly_rate(8.0, RateBasis::Annual);
        assert_abs_diff_eq!(r, 0.006434030, epsilon = 1e-9);
        assert!(r < 0.08 / 12.0);
    }

    #[test]
    fn test_monthly_rate_is_direct() {
        assert_abs_diff_eq!(effective_monthly_rate(1.0, RateBasis::Monthly), 0.01, epsilon = 1e-15);
        assert_abs_diff_eq!(effective_monthly_rate(-0.5, RateBasis::Monthly), -0.005, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_rate_is_exactly_zero() {
        assert_eq!(effective_monthly_rate(0.0, RateBasis::Annual), 0.0);
        assert_eq!(effective_monthly_rate(0.0, RateBasis::Monthly), 0.0);
    }

    #[test]
    fn test_total_loss_floor() {
        assert_eq!(effective_monthly_rate(-100.0, RateBasis::Annual), -1.0);
        assert_eq!(effective_monthly_rate(-250.0, RateBasis::Annual), -1.0);
    }

    #[test]
    fn test_horizon_months() {
        assert_eq!(horizon_months(Horizon::months(14)), 14);
        assert_eq!(horizon_months(Horizon::years(26)), 312);
        assert_eq!(horizon_months(Horizon::years(0)), 0);
        assert_eq!(horizon_months(Horizon::years(u32::MAX)), u32::MAX);
    }
}
