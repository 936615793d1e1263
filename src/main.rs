//! Wealth Projection CLI
//!
//! Command-line interface for running projections, solving for the time or
//! contribution needed to reach a target, and exporting the results

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use wealth_projection::input::{coerce_number, load_request, NumericField};
use wealth_projection::report::{
    advise_from_env, export_json, export_monthly_csv, export_yearly_csv, format_currency,
    format_months, format_percent,
};
use wealth_projection::{
    CalculationMode, PeriodUnit, ProjectionInput, ProjectionResult, RateBasis, RawProjectionInput,
    ScenarioRunner,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliRateBasis {
    Annual,
    Monthly,
}

impl From<CliRateBasis> for RateBasis {
    fn from(value: CliRateBasis) -> Self {
        match value {
            CliRateBasis::Annual => RateBasis::Annual,
            CliRateBasis::Monthly => RateBasis::Monthly,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliPeriodUnit {
    Months,
    Years,
}

impl From<CliPeriodUnit> for PeriodUnit {
    fn from(value: CliPeriodUnit) -> Self {
        match value {
            CliPeriodUnit::Months => PeriodUnit::Months,
            CliPeriodUnit::Years => PeriodUnit::Years,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliMode {
    /// Forward projection over the horizon
    Project,
    /// Months needed to reach the target
    TimeToTarget,
    /// Monthly contribution needed to reach the target at the horizon
    Contribution,
}

impl From<CliMode> for CalculationMode {
    fn from(value: CliMode) -> Self {
        match value {
            CliMode::Project => CalculationMode::Project,
            CliMode::TimeToTarget => CalculationMode::SolveTimeToTarget,
            CliMode::Contribution => CalculationMode::SolveContributionForTarget,
        }
    }
}

/// Compound-interest wealth projections
///
/// Numeric options are read like form fields: anything that does not parse
/// as a number counts as 0.
#[derive(Parser, Debug)]
#[command(name = "wealth_projection", version, about)]
struct Cli {
    /// Starting capital
    #[arg(long, default_value = "1000")]
    initial: String,

    /// End-of-month contribution
    #[arg(long, default_value = "1000")]
    contribution: String,

    /// Interest rate in percent
    #[arg(long, default_value = "8")]
    rate: String,

    /// Whether the rate is annual or monthly
    #[arg(long, value_enum, default_value_t = CliRateBasis::Annual)]
    basis: CliRateBasis,

    /// Horizon length
    #[arg(long, default_value = "26")]
    horizon: String,

    /// Unit of the horizon length
    #[arg(long, value_enum, default_value_t = CliPeriodUnit::Years)]
    unit: CliPeriodUnit,

    /// What to calculate
    #[arg(long, value_enum, default_value_t = CliMode::TimeToTarget)]
    mode: CliMode,

    /// Goal balance for the solve modes
    #[arg(long, default_value = "1000000")]
    target: String,

    /// Read the request from a JSON file instead of the options above
    #[arg(long)]
    request: Option<PathBuf>,

    /// Write the month-by-month history to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the annual breakdown to a CSV file
    #[arg(long)]
    yearly_csv: Option<PathBuf>,

    /// Write the full result as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Also project at each of these rates (comma separated, percent)
    #[arg(long, value_delimiter = ',')]
    sweep: Vec<String>,

    /// Ask the configured advisor for a short comment on the result
    #[arg(long)]
    advice: bool,
}

impl Cli {
    fn raw_input(&self) -> RawProjectionInput {
        RawProjectionInput {
            initial_capital: NumericField::from(self.initial.as_str()),
            monthly_contribution: NumericField::from(self.contribution.as_str()),
            nominal_rate: NumericField::from(self.rate.as_str()),
            rate_basis: self.basis.into(),
            horizon_count: NumericField::from(self.horizon.as_str()),
            horizon_unit: self.unit.into(),
            mode: self.mode.into(),
            target: NumericField::from(self.target.as_str()),
        }
    }
}

fn print_summary(input: &ProjectionInput, result: &ProjectionResult) {
    println!("Mode: {:?}", result.mode);
    println!("  Monthly rate: {}", format_percent(result.monthly_rate * 100.0, 4));
    if let Some(required) = result.required_monthly_contribution {
        println!("  Required contribution: {}", format_currency(required));
    } else {
        println!("  Monthly contribution: {}", format_currency(result.monthly_contribution));
    }
    println!("  Final total: {}", format_currency(result.final_total));
    println!("  Total invested: {}", format_currency(result.total_invested));
    println!("  Total interest: {}", format_currency(result.total_interest));
    println!(
        "  Power factor: {} ({:.2}x)",
        format_percent(result.power_factor, 0),
        result.growth_multiple()
    );
    println!(
        "  Time to {}: {}",
        format_currency(input.target),
        format_months(result.target_reached_in_months)
    );
}

fn print_yearly_table(result: &ProjectionResult) {
    println!(
        "{:>4} {:>6} {:>18} {:>18} {:>20} {:>20} {:>20}",
        "Year", "Months", "Contribution", "Interest", "Total Invested", "Total Interest", "Accumulated"
    );
    println!("{}", "-".repeat(112));

    for year in &result.yearly_breakdown {
        println!(
            "{:>4} {:>6} {:>18} {:>18} {:>20} {:>20} {:>20}",
            year.year,
            year.months,
            format_currency(year.annual_contribution),
            format_currency(year.annual_interest),
            format_currency(year.total_contributed),
            format_currency(year.total_interest),
            format_currency(year.total_accumulated),
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let raw = match &cli.request {
        Some(path) => load_request(path)
            .with_context(|| format!("Failed to load request from {}", path.display()))?,
        None => cli.raw_input(),
    };
    let input = raw.to_input();

    let runner = ScenarioRunner::new();
    let result = runner.run(&input);

    println!("Wealth Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("=======================\n");
    print_summary(&input, &result);
    println!();
    print_yearly_table(&result);

    if !cli.sweep.is_empty() {
        let rates: Vec<f64> = cli
            .sweep
            .iter()
            .map(|s| coerce_number(s))
            .collect();
        let results = runner.rate_sweep(&input, &rates);

        println!("\nRate sweep:");
        println!("{:>8} {:>20} {:>20} {:>26}", "Rate", "Final Total", "Contribution", "Time to Target");
        for (rate, swept) in rates.iter().zip(&results) {
            println!(
                "{:>8} {:>20} {:>20} {:>26}",
                format_percent(*rate, 2),
                format_currency(swept.final_total),
                format_currency(swept.monthly_contribution),
                format_months(swept.target_reached_in_months),
            );
        }
    }

    if let Some(path) = &cli.csv {
        export_monthly_csv(path, &result)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Monthly history written to {}", path.display());
        println!("\nMonthly history written to: {}", path.display());
    }

    if let Some(path) = &cli.yearly_csv {
        export_yearly_csv(path, &result)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Annual breakdown written to: {}", path.display());
    }

    if let Some(path) = &cli.json {
        export_json(path, &result)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Result written to: {}", path.display());
    }

    if cli.advice {
        println!("\nAdvice: {}", advise_from_env(&input, &result));
    }

    Ok(())
}
