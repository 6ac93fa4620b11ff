//! Evaluate every site in a CSV file and write one result row per site
//!
//! Usage: cargo run --bin run_batch -- --input sites.csv --output feasibility_output.csv

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use solar_feasibility::input::load_sites;
use solar_feasibility::{FeasibilityResult, ScenarioRunner};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Batch solar feasibility over a CSV of sites")]
struct Args {
    /// Sites CSV: site_id,roof_area,monthly_consumption,tariff_rate,cost_per_watt,irradiance
    #[arg(long)]
    input: PathBuf,

    /// Output CSV path
    #[arg(long, default_value = "feasibility_output.csv")]
    output: PathBuf,

    /// JSON assumptions file
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

const OUTPUT_HEADER: [&str; 6] = [
    "site_id",
    "system_size_kw",
    "monthly_generation_kwh",
    "monthly_savings",
    "total_system_cost",
    "payback_years",
];

/// One output row; an absent payback becomes an empty cell
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    site_id: &'a str,
    system_size_kw: f64,
    monthly_generation_kwh: f64,
    monthly_savings: f64,
    total_system_cost: f64,
    payback_years: Option<f64>,
}

/// Write the header and one row per site, in order.
/// Returns the number of sites with no payback period.
fn write_results<W: Write>(
    writer: W,
    results: &[(&str, FeasibilityResult)],
) -> anyhow::Result<usize> {
    let mut out = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    out.write_record(OUTPUT_HEADER)?;

    let mut undefined = 0usize;
    for &(site_id, ref result) in results {
        if result.payback_years.is_none() {
            undefined += 1;
        }
        out.serialize(OutputRow {
            site_id,
            system_size_kw: result.system_size_kw,
            monthly_generation_kwh: result.monthly_generation_kwh,
            monthly_savings: result.monthly_savings,
            total_system_cost: result.total_system_cost,
            payback_years: result.payback_years,
        })?;
    }
    out.flush()?;

    Ok(undefined)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let sites = load_sites(&args.input)
        .with_context(|| format!("loading sites from {}", args.input.display()))?;
    println!("Loaded {} sites in {:?}", sites.len(), start.elapsed());

    let runner = match &args.assumptions {
        Some(path) => ScenarioRunner::from_json_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => ScenarioRunner::new(),
    };

    let results = runner.run_sites(&sites);

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let undefined = write_results(BufWriter::new(file), &results)?;

    println!("Output written to {}", args.output.display());
    if undefined > 0 {
        println!("  {} sites have no payback period (zero savings)", undefined);
    }
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
