//! Solar Feasibility CLI
//!
//! Evaluates one site and prints the summary as `Key Name: value` lines.
//! Without arguments it runs the reference sample site.

use anyhow::Context;
use clap::Parser;
use solar_feasibility::{
    Assumptions, FeasibilityEngine, FeasibilityError, FeasibilityInput, Report,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "solar_feasibility", version, about = "Rooftop solar feasibility calculator")]
struct Cli {
    /// Usable roof area (m²)
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    roof_area: f64,

    /// Monthly electricity consumption (kWh)
    #[arg(long, default_value_t = 300.0, allow_negative_numbers = true)]
    consumption: f64,

    /// Electricity tariff (currency per kWh)
    #[arg(long, default_value_t = 9.5, allow_negative_numbers = true)]
    tariff_rate: f64,

    /// Installed cost (currency per watt)
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    cost_per_watt: f64,

    /// Daily solar irradiance (kWh/m²/day)
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    irradiance: f64,

    /// JSON file overriding panel_efficiency_factor / performance_ratio
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Clamp every input into the entry form's range
    #[arg(long)]
    clamp: bool,

    /// Reject negative or non-finite inputs
    #[arg(long)]
    strict: bool,

    /// Append payback rating, energy balance and annual savings
    #[arg(long)]
    insights: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        // Report and exit normally
        match err.downcast_ref::<FeasibilityError>() {
            Some(e) if e.is_input_error() => println!("Input Error: {}", e),
            _ => println!("Calculation Error: {:#}", err),
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let assumptions = match &cli.assumptions {
        Some(path) => Assumptions::from_json_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => Assumptions::default(),
    };

    let mut input = FeasibilityInput::new(
        cli.roof_area,
        cli.consumption,
        cli.tariff_rate,
        cli.cost_per_watt,
        cli.irradiance,
    );
    if cli.clamp {
        input = input.clamped();
    }

    let engine = if cli.strict {
        FeasibilityEngine::try_new(input, assumptions)?
    } else {
        FeasibilityEngine::with_assumptions(input, assumptions)
    };
    log::info!("evaluating {:?} with {:?}", input, assumptions);

    let result = engine.summary();
    let report = Report::new(input, result);

    if cli.json {
        let json = if cli.insights {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string_pretty(&result)?
        };
        println!("{}", json);
        return Ok(());
    }

    println!("=== Solar Feasibility Calculator Results ===");
    for line in result.to_lines() {
        println!("{}", line);
    }

    if cli.insights {
        println!();
        for line in report.insight_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_reference_sample() {
        let cli = Cli::parse_from(["solar_feasibility"]);
        assert_eq!(cli.roof_area, 100.0);
        assert_eq!(cli.consumption, 300.0);
        assert_eq!(cli.tariff_rate, 9.5);
        assert_eq!(cli.cost_per_watt, 50.0);
        assert_eq!(cli.irradiance, 5.0);
        assert!(!cli.strict && !cli.clamp && !cli.json && !cli.insights);
    }

    #[test]
    fn test_strict_rejects_negative_input() {
        let cli = Cli::parse_from(["solar_feasibility", "--strict", "--irradiance", "-2"]);
        let err = run(&cli).unwrap_err();
        let inner = err.downcast_ref::<FeasibilityError>().unwrap();
        assert!(inner.is_input_error());
    }

    #[test]
    fn test_missing_assumptions_file_is_calculation_error() {
        let cli = Cli::parse_from([
            "solar_feasibility",
            "--assumptions",
            "/nonexistent/assumptions.json",
        ]);
        let err = run(&cli).unwrap_err();
        let inner = err.downcast_ref::<FeasibilityError>().unwrap();
        assert!(!inner.is_input_error());
    }

    #[test]
    fn test_run_sample() {
        let cli = Cli::parse_from(["solar_feasibility", "--insights"]);
        assert!(run(&cli).is_ok());
    }
}
