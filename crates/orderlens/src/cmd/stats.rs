//! stats - row counts and data freshness for the loaded dataset.

use anyhow::Result;
use orderlens_core::Dataset;

use crate::output::{self, OutputFormat};

pub fn run(dataset: &Dataset, format: OutputFormat) -> Result<()> {
    let stats = dataset.stats();

    let cells = vec![vec![
        stats.orders.to_string(),
        stats.order_lines.to_string(),
        stats.items.to_string(),
        stats.merchants.to_string(),
        stats
            .latest_order_time
            .map_or_else(|| "-".to_string(), |ts| ts.to_rfc3339()),
    ]];
    output::render(
        format,
        &[
            "orders",
            "order_lines",
            "items",
            "merchants",
            "latest_order_time",
        ],
        &cells,
        &stats,
        &mut std::io::stdout(),
    )
}
