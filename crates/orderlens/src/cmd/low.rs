//! low-performers - a merchant's least-ordered items.

use anyhow::{Context, Result};
use orderlens_analysis::{low_performing_items, Outcome};
use orderlens_core::Dataset;

use crate::cmd::popular::item_table;
use crate::output::{self, OutputFormat};

pub fn run(
    dataset: &Dataset,
    merchant: &str,
    days: u32,
    top: usize,
    format: OutputFormat,
) -> Result<()> {
    let outcome = low_performing_items(dataset, merchant, days, top)
        .with_context(|| format!("low-performers failed for merchant {merchant}"))?;

    let mut stdout = std::io::stdout();
    match outcome {
        Outcome::Empty => output::render_empty(format, &mut stdout),
        Outcome::Data(rows) => item_table(&rows, format, &mut stdout),
    }
}
