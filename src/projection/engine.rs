//! Core projection engine for month-by-month wealth projections

use log::{debug, info, warn};

use crate::input::{CalculationMode, ProjectionInput};
use super::rates::{effective_monthly_rate, horizon_months, MAX_SIMULATION_MONTHS};
use super::records::{power_factor, MonthRecord, ProjectionResult};
use super::solver::required_contribution;
use super::state::ProjectionState;
use super::yearly::aggregate_years;

/// Longest horizon simulated for the horizon-bound modes (1000 years)
pub const MAX_HORIZON_MONTHS: u32 = 12_000;

/// Configuration for a projection engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Simulation ceiling for `SolveTimeToTarget`
    pub max_simulation_months: u32,

    /// Horizons longer than this are clamped in the other modes
    pub max_horizon_months: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_simulation_months: MAX_SIMULATION_MONTHS,
            max_horizon_months: MAX_HORIZON_MONTHS,
        }
    }
}

/// Output of the month-by-month simulation
struct Simulation {
    history: Vec<MonthRecord>,
    target_month: Option<u32>,
    last: ProjectionState,
}

/// Stateless projection engine
///
/// Each call allocates its own history; one engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: EngineConfig,
}

impl ProjectionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a projection for one input
    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        let monthly_rate = effective_monthly_rate(input.nominal_rate, input.rate_basis);
        let horizon = self.bounded_horizon(input);

        debug!(
            "Projecting {:?}: capital={} contribution={} rate={}% ({}) horizon={} months target={}",
            input.mode,
            input.initial_capital,
            input.monthly_contribution,
            input.nominal_rate,
            input.rate_basis.as_str(),
            horizon,
            input.target,
        );

        let (contribution, required, bound, stop_at_target) = match input.mode {
            CalculationMode::Project => (input.monthly_contribution, None, horizon, false),
            CalculationMode::SolveTimeToTarget => (
                input.monthly_contribution,
                None,
                self.config.max_simulation_months,
                true,
            ),
            CalculationMode::SolveContributionForTarget => {
                let c = required_contribution(input.initial_capital, monthly_rate, horizon, input.target);
                (c, Some(c), horizon, false)
            }
        };

        let sim = self.simulate(
            input.initial_capital,
            monthly_rate,
            contribution,
            bound,
            input.target,
            stop_at_target,
        );

        let yearly_breakdown = aggregate_years(&sim.history, contribution);
        let total_interest = sim.last.cumulative_interest();

        ProjectionResult {
            mode: input.mode,
            monthly_rate,
            monthly_contribution: contribution,
            required_monthly_contribution: required,
            final_total: sim.last.total,
            total_invested: sim.last.contributed,
            total_interest,
            power_factor: power_factor(total_interest, sim.last.contributed),
            target_reached_in_months: sim.target_month,
            history: sim.history,
            yearly_breakdown,
        }
    }

    /// Horizon in months, clamped to `max_horizon_months`
    fn bounded_horizon(&self, input: &ProjectionInput) -> u32 {
        let months = horizon_months(input.horizon);
        if months > self.config.max_horizon_months {
            warn!(
                "Horizon of {} months exceeds limit, clamping to {}",
                months, self.config.max_horizon_months
            );
            self.config.max_horizon_months
        } else {
            months
        }
    }

    /// Simulate months 1..=bound, stopping at the target when asked to
    fn simulate(
        &self,
        initial_capital: f64,
        monthly_rate: f64,
        contribution: f64,
        bound: u32,
        target: f64,
        stop_at_target: bool,
    ) -> Simulation {
        let mut state = ProjectionState::initial(initial_capital);
        let mut history = Vec::with_capacity(bound as usize + 1);
        history.push(state.to_record());

        let mut target_month = if state.total >= target { Some(0) } else { None };

        if !(stop_at_target && target_month.is_some()) {
            for _ in 1..=bound {
                state.advance_month(monthly_rate, contribution);
                history.push(state.to_record());

                if target_month.is_none() && state.total >= target {
                    target_month = Some(state.month);
                    if stop_at_target {
                        info!("Target {} reached in month {}", target, state.month);
                        break;
                    }
                }
            }
        }

        if stop_at_target && target_month.is_none() {
            info!("Target {} not reached within {} months", target, bound);
        }

        Simulation { history, target_month, last: state }
    }
}

/// Compute a projection with the default engine configuration
pub fn compute_projection(input: &ProjectionInput) -> ProjectionResult {
    ProjectionEngine::default().project(input)
}
