//! house-rocket - purchase recommendations for a house sales export
//!
//! Writes the recommendation table as CSV to stdout. Progress, the
//! portfolio summary and the category overview are logged to stderr.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use rocket_core::{
    correlation_matrix, describe_categories, run, EstateConfig, PipelineOutput,
    PortfolioSummary,
};
use rocket_stats::round_to;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "house-rocket", version, about)]
struct Args {
    /// Sales export (CSV, or TSV by extension)
    input: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging();

    let config = EstateConfig::discover()?;
    tracing::info!(input = %args.input.display(), "running pipeline");

    let output = run(&args.input, &config)?;
    report(&output, &config)?;

    let written = rocket_io::write_csv(io::stdout().lock(), &output.recommendations)?;
    tracing::debug!(rows = written, "wrote recommendations");

    Ok(())
}

/// Log the headline numbers and the exploratory overview
fn report(output: &PipelineOutput, config: &EstateConfig) -> Result<(), Box<dyn std::error::Error>> {
    let precision = config.display.float_precision;
    let summary = PortfolioSummary::compute(&output.properties, &output.recommendations);

    tracing::info!(
        total = summary.total_houses,
        to_buy = summary.houses_to_buy,
        percent = round_to(summary.percent_to_buy, precision),
        invested_m = round_to(summary.invested_millions(), precision),
        profit_m = round_to(summary.expected_profit_millions(), precision),
        margin_percent = round_to(summary.average_margin_percent, precision),
        "portfolio summary"
    );

    for category in describe_categories(&output.properties)? {
        tracing::info!(
            column = category.column,
            count = category.count,
            unique = category.unique,
            top = category.top.as_deref().unwrap_or("-"),
            freq = category.freq,
            "category"
        );
    }

    let correlations = correlation_matrix(&output.properties)?;
    for label in &correlations.labels {
        if let Some(r) = correlations.get(label, "price") {
            tracing::debug!(column = %label, price = r, "correlation");
        }
    }

    for rec in output.recommendations.iter().take(config.display.preview_rows) {
        tracing::debug!(
            id = rec.id,
            zipcode = rec.zipcode,
            price = rec.price,
            profit = round_to(rec.profit, precision),
            "recommended"
        );
    }

    Ok(())
}
