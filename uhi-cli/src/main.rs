//! UHI CLI - inspect the embedded CDC indicator dataset from the terminal.
//!
//! Runs the same join and classification the map app runs, against the
//! embedded fixture, so breaks and rankings can be checked without a
//! browser.

use anyhow::bail;
use clap::{Parser, Subcommand};
use log::info;

use uhi_cdc::attribute::AttributeCatalog;
use uhi_cdc::indicator::{IndicatorRow, IndicatorValue};
use uhi_cdc::region::{GeometryHandle, RegionRecord};
use uhi_data::join::join_rows;
use uhi_data::rank::ranked_indices;
use uhi_data::scale::{ClassificationScale, ScaleConfig};

#[derive(Parser)]
#[command(
    name = "uhi-cli",
    version,
    about = "US health-indicator data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the attribute catalog
    Catalog,

    /// Print quantile class breaks for an attribute
    Breaks {
        /// Attribute code (see `catalog`)
        #[arg(short, long)]
        attribute: String,
    },

    /// Print regions ranked by descending attribute value
    Rank {
        /// Attribute code (see `catalog`)
        #[arg(short, long)]
        attribute: String,

        /// Limit output to the top N regions
        #[arg(short, long)]
        count: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let catalog = AttributeCatalog::cdc_alcohol();

    match cli.command {
        Command::Catalog => {
            for descriptor in catalog.descriptors() {
                println!("{:<16} {}", descriptor.code, descriptor.label);
                println!("{:<16} {}", "", descriptor.description);
            }
            Ok(())
        }
        Command::Breaks { attribute } => {
            let regions = load_regions(&catalog);
            run_breaks(&regions, &catalog, &attribute)
        }
        Command::Rank { attribute, count } => {
            let regions = load_regions(&catalog);
            run_rank(&regions, &catalog, &attribute, count)
        }
    }
}

/// Join the embedded rows against region records derived from the rows
/// themselves (the CLI has no geometry; the handle is just the row index).
fn load_regions(catalog: &AttributeCatalog) -> Vec<RegionRecord> {
    let rows = IndicatorRow::get_row_vector();
    let mut regions: Vec<RegionRecord> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| RegionRecord::new(&row.code, &row.name, GeometryHandle(i)))
        .collect();
    let report = join_rows(&rows, &mut regions, catalog);
    info!(
        "joined {} rows ({} dropped, {} duplicate)",
        report.matched, report.dropped_rows, report.duplicate_rows
    );
    regions
}

fn run_breaks(
    regions: &[RegionRecord],
    catalog: &AttributeCatalog,
    attribute: &str,
) -> anyhow::Result<()> {
    if !catalog.contains(attribute) {
        bail!("unknown attribute code: {}", attribute);
    }
    let scale = ClassificationScale::build(regions, attribute, &ScaleConfig::default());
    match scale.domain() {
        Some((min, max)) => println!("domain: [{:.2}, {:.2}]", min, max),
        None => {
            println!("no recorded values for {}", attribute);
            return Ok(());
        }
    }
    let breaks = scale.breaks();
    for (i, color) in scale.colors().iter().enumerate() {
        let upper = match (i < breaks.len(), breaks.last()) {
            (true, _) => format!("<= {:.2}", breaks[i]),
            (false, Some(last)) => format!("> {:.2}", last),
            (false, None) => "all values".to_string(),
        };
        println!("class {}  {}  {}", i + 1, color, upper);
    }
    Ok(())
}

fn run_rank(
    regions: &[RegionRecord],
    catalog: &AttributeCatalog,
    attribute: &str,
    count: Option<usize>,
) -> anyhow::Result<()> {
    if !catalog.contains(attribute) {
        bail!("unknown attribute code: {}", attribute);
    }
    let order = ranked_indices(regions, attribute);
    let limit = count.unwrap_or(order.len());
    for (place, &i) in order.iter().take(limit).enumerate() {
        let region = &regions[i];
        let value = match region.value(attribute) {
            IndicatorValue::Recorded(v) => format!("{:.1}", v),
            IndicatorValue::NoData => "no data".to_string(),
        };
        println!("{:>3}. {:<4} {:<24} {}", place + 1, region.code, region.name, value);
    }
    Ok(())
}
