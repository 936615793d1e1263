//! Scenario runner for batch projections
//!
//! Shares one engine configuration across many inputs and runs them in
//! parallel with rayon.

use rayon::prelude::*;

use crate::input::ProjectionInput;
use crate::projection::{EngineConfig, ProjectionEngine, ProjectionResult};

/// Runner for many projections with the same engine configuration
///
/// # Example
/// ```
/// use wealth_projection::{Horizon, ProjectionInput, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let base = ProjectionInput::new(1000.0, 500.0, 0.0, Horizon::years(10));
/// let results = runner.rate_sweep(&base, &[4.0, 6.0, 8.0]);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Runner with the default engine configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> ProjectionResult {
        self.engine.project(input)
    }

    /// Run projections for many inputs in parallel, preserving order
    pub fn run_batch(&self, inputs: &[ProjectionInput]) -> Vec<ProjectionResult> {
        inputs.par_iter().map(|input| self.engine.project(input)).collect()
    }

    /// Run the same input at each nominal rate (percentages)
    pub fn rate_sweep(&self, base: &ProjectionInput, rates: &[f64]) -> Vec<ProjectionResult> {
        let inputs: Vec<ProjectionInput> = rates
            .iter()
            .map(|&rate| ProjectionInput {
                nominal_rate: rate,
                ..base.clone()
            })
            .collect();
        self.run_batch(&inputs)
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}
