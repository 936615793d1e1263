//! Required monthly contribution to reach a target
//!
//! Contributions are postecipated (ordinary annuity): paid at the end of each
//! month, so they earn nothing in the month they are made.
//!
//! ```text
//! FV_initial = P * (1 + r)^N
//! need       = target - FV_initial
//! c          = need / [((1 + r)^N - 1) / r]      (r != 0)
//! c          = need / N                          (r == 0)
//! ```

use log::debug;

/// Future value of a lump sum after `months` of compounding at `monthly_rate`
pub fn future_value_lump_sum(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    principal * growth_factor(monthly_rate, months)
}

/// Future value of one unit contributed at the end of each of `months` months
pub fn annuity_factor(monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate == 0.0 {
        months as f64
    } else {
        (growth_factor(monthly_rate, months) - 1.0) / monthly_rate
    }
}

fn growth_factor(monthly_rate: f64, months: u32) -> f64 {
    (1.0 + monthly_rate).powf(months as f64)
}

/// Constant end-of-month contribution reaching `target` after `months`
///
/// Never negative: 0 when the initial capital alone already gets there, and
/// 0 for a zero-length horizon.
pub fn required_contribution(initial_capital: f64, monthly_rate: f64, months: u32, target: f64) -> f64 {
    let need = target - future_value_lump_sum(initial_capital, monthly_rate, months);
    if need <= 0.0 || months == 0 {
        debug!("Initial capital covers target (need = {:.2}, months = {})", need, months);
        return 0.0;
    }

    let factor = annuity_factor(monthly_rate, months);
    let contribution = need / factor;
    debug!("Solved contribution {:.6} (need = {:.2}, factor = {:.6})", contribution, need, factor);

    if contribution.is_finite() {
        contribution.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_annuity_factor_zero_rate() {
        assert_eq!(annuity_factor(0.0, 10), 10.0);
        assert_eq!(annuity_factor(0.0, 0), 0.0);
    }

    #[test]
    fn test_annuity_factor_matches_sum() {
        let r: f64 = 0.01;
        let expected: f64 = (0..12).map(|k| (1.0 + r).powi(k)).sum();
        assert_relative_eq!(annuity_factor(r, 12), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_rate_contribution() {
        // 10,000 in 10 months without interest, starting from 1,000
        let c = required_contribution(1000.0, 0.0, 10, 10_000.0);
        assert_abs_diff_eq!(c, 900.0, epsilon = 1e-9);
    }

    #[test]
    fn test_initial_capital_exceeds_target() {
        assert_eq!(required_contribution(2_000_000.0, 0.005, 120, 1_000_000.0), 0.0);
        assert_eq!(required_contribution(1_000_000.0, 0.0, 12, 1_000_000.0), 0.0);
    }

    #[test]
    fn test_zero_months() {
        assert_eq!(required_contribution(0.0, 0.01, 0, 1_000_000.0), 0.0);
        assert_eq!(required_contribution(0.0, 0.0, 0, 1_000_000.0), 0.0);
    }

    #[test]
    fn test_positive_rate_contribution() {
        let r = 0.01;
        let n = 24;
        let c = required_contribution(500.0, r, n, 20_000.0);

        // Rebuild the target from the closed form
        let fv = future_value_lump_sum(500.0, r, n) + c * annuity_factor(r, n);
        assert_relative_eq!(fv, 20_000.0, max_relative = 1e-12);
    }
}
