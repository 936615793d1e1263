//! Running balance of a projection

use super::records::MonthRecord;

/// Balance state between months
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Month just completed (0 = initial state)
    pub month: u32,

    /// Total balance
    pub total: f64,

    /// Initial capital plus all contributions to date
    pub contributed: f64,

    /// Interest credited in the month just completed
    pub interest_this_month: f64,
}

impl ProjectionState {
    /// State at month 0, before any interest or contribution
    pub fn initial(initial_capital: f64) -> Self {
        Self {
            month: 0,
            total: initial_capital,
            contributed: initial_capital,
            interest_this_month: 0.0,
        }
    }

    /// Advance one month: accrue interest on the balance, then add the
    /// end-of-month contribution
    pub fn advance_month(&mut self, monthly_rate: f64, contribution: f64) {
        self.month += 1;

        self.interest_this_month = self.total * monthly_rate;
        self.total += self.interest_this_month;

        self.total += contribution;
        self.contributed += contribution;
    }

    /// Cumulative interest (total less contributed)
    pub fn cumulative_interest(&self) -> f64 {
        self.total - self.contributed
    }

    pub fn to_record(&self) -> MonthRecord {
        MonthRecord {
            month: self.month,
            total: self.total,
            contributed: self.contributed,
            interest: self.interest_this_month,
            cumulative_interest: self.cumulative_interest(),
        }
    }
}
