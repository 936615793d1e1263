//! Annual breakdown derived from the month-by-month history

use super::records::{MonthRecord, YearRecord};

/// Aggregate month records into year records
///
/// One row per completed 12-month block, plus one final row covering the
/// months after the last full year when the history stops short of a year
/// boundary. Only months present in `history` are aggregated, so an early
/// stop yields a short final year rather than an extrapolated one.
pub fn aggregate_years(history: &[MonthRecord], monthly_contribution: f64) -> Vec<YearRecord> {
    let (first, last_month) = match (history.first(), history.last()) {
        (Some(first), Some(last)) => (first, last.month),
        _ => return Vec::new(),
    };

    let mut years = Vec::with_capacity(last_month as usize / 12 + 1);
    let mut previous = first;

    for record in history
        .iter()
        .filter(|r| r.month > 0 && (r.month % 12 == 0 || r.month == last_month))
    {
        let months = record.month - previous.month;
        years.push(YearRecord {
            year: years.len() as u32 + 1,
            months,
            annual_contribution: monthly_contribution * months as f64,
            annual_interest: record.cumulative_interest - previous.cumulative_interest,
            total_contributed: record.contributed,
            total_interest: record.cumulative_interest,
            total_accumulated: record.total,
        });
        previous = record;
    }

    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::state::ProjectionState;
    use approx::assert_abs_diff_eq;

    fn history(initial: f64, rate: f64, contribution: f64, months: u32) -> Vec<MonthRecord> {
        let mut state = ProjectionState::initial(initial);
        let mut records = vec![state.to_record()];
        for _ in 0..months {
            state.advance_month(rate, contribution);
            records.push(state.to_record());
        }
        records
    }

    #[test]
    fn test_full_years_only() {
        let hist = history(1000.0, 0.005, 100.0, 24);
        let years = aggregate_years(&hist, 100.0);

        assert_eq!(years.len(), 2);
        assert_eq!(years[0].months, 12);
        assert_eq!(years[1].months, 12);
        assert_eq!(years[1].total_accumulated, hist[24].total);
        assert_eq!(years[0].total_accumulated, hist[12].total);
    }

    #[test]
    fn test_partial_last_year() {
        let hist = history(0.0, 0.01, 250.0, 14);
        let years = aggregate_years(&hist, 250.0);

        assert_eq!(years.len(), 2);
        assert_eq!(years[1].year, 2);
        assert_eq!(years[1].months, 2);
        assert_eq!(years[1].annual_contribution, 500.0);
        assert_eq!(years[1].total_accumulated, hist[14].total);
        assert_abs_diff_eq!(
            years[1].annual_interest,
            hist[14].cumulative_interest - hist[12].cumulative_interest,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_annual_interest_sums_to_total() {
        let hist = history(5000.0, 0.0075, 300.0, 41);
        let years = aggregate_years(&hist, 300.0);

        let summed: f64 = years.iter().map(|y| y.annual_interest).sum();
        assert_abs_diff_eq!(summed, hist[41].cumulative_interest, epsilon = 1e-6);

        let contributed: f64 = years.iter().map(|y| y.annual_contribution).sum();
        assert_abs_diff_eq!(contributed, 300.0 * 41.0, epsilon = 1e-9);
    }

    #[test]
    fn test_short_history() {
        let hist = history(100.0, 0.01, 10.0, 5);
        let years = aggregate_years(&hist, 10.0);
        assert_eq!(years.len(), 1);
        assert_eq!(years[0].months, 5);
        assert_eq!(years[0].annual_contribution, 50.0);
    }

    #[test]
    fn test_month_zero_only() {
        let hist = history(100.0, 0.01, 10.0, 0);
        assert!(aggregate_years(&hist, 10.0).is_empty());
        assert!(aggregate_years(&[], 10.0).is_empty());
    }
}
