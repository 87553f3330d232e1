//! orderlens - windowed analytics over food-delivery order data.
//!
//! Loads the order-data CSV tables from a data directory and answers a
//! fixed set of business questions over them:
//!
//! # Usage
//!
//! ```bash
//! orderlens popular-items --merchant 3e5f1
//! orderlens low-performers --merchant 3e5f1 --top 3
//! orderlens sales-summary --merchant 3e5f1 --period last_7_days
//! orderlens popular-cuisines --city 108 --format json
//! orderlens stats
//! ```

#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use output::OutputFormat;

/// Windowed analytics over food-delivery order data.
#[derive(Parser, Debug)]
#[command(name = "orderlens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the order-data CSV tables
    #[arg(long, value_name = "DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    /// Output format
    #[arg(short = 'f', long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// A merchant's most-ordered items by distinct-order count
    PopularItems {
        /// Merchant identifier
        #[arg(long)]
        merchant: String,
        /// Window length in days
        #[arg(long, default_value_t = orderlens_analysis::DEFAULT_ITEM_DAYS)]
        days: u32,
    },
    /// A merchant's least-ordered items by distinct-order count
    LowPerformers {
        /// Merchant identifier
        #[arg(long)]
        merchant: String,
        /// Window length in days
        #[arg(long, default_value_t = orderlens_analysis::DEFAULT_ITEM_DAYS)]
        days: u32,
        /// Number of items to report
        #[arg(long, default_value_t = orderlens_analysis::DEFAULT_TOP_N)]
        top: usize,
    },
    /// A merchant's sales totals over a named period
    SalesSummary {
        /// Merchant identifier
        #[arg(long)]
        merchant: String,
        /// Named period (last_7_days, last_30_days, last_90_days)
        #[arg(long, default_value = orderlens_analysis::DEFAULT_SALES_PERIOD)]
        period: String,
    },
    /// A city's most popular cuisine tags
    PopularCuisines {
        /// City identifier
        #[arg(long)]
        city: String,
        /// Window length in days
        #[arg(long, default_value_t = orderlens_analysis::DEFAULT_CUISINE_DAYS)]
        days: u32,
    },
    /// Row counts and data freshness for the loaded dataset
    Stats,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let loaded = orderlens_ingest::load_dir(&cli.data_dir)
        .with_context(|| format!("failed to load data from {}", cli.data_dir.display()))?;
    for warning in &loaded.warnings {
        eprintln!("warning: {warning}");
    }
    let dataset = loaded.dataset;

    match &cli.command {
        Command::PopularItems { merchant, days } => {
            cmd::popular::run(&dataset, merchant, *days, cli.format)
        }
        Command::LowPerformers {
            merchant,
            days,
            top,
        } => cmd::low::run(&dataset, merchant, *days, *top, cli.format),
        Command::SalesSummary { merchant, period } => {
            cmd::sales::run(&dataset, merchant, period, cli.format)
        }
        Command::PopularCuisines { city, days } => {
            cmd::cuisines::run(&dataset, city, *days, cli.format)
        }
        Command::Stats => cmd::stats::run(&dataset, cli.format),
    }
}
