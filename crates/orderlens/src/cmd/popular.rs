//! popular-items - a merchant's most-ordered items.

use std::io::Write;

use anyhow::{Context, Result};
use orderlens_analysis::{popular_items, ItemFrequency, Outcome};
use orderlens_core::Dataset;

use crate::output::{self, OutputFormat};

pub fn run(dataset: &Dataset, merchant: &str, days: u32, format: OutputFormat) -> Result<()> {
    let outcome = popular_items(dataset, merchant, days)
        .with_context(|| format!("popular-items failed for merchant {merchant}"))?;

    let mut stdout = std::io::stdout();
    match outcome {
        Outcome::Empty => output::render_empty(format, &mut stdout),
        Outcome::Data(rows) => item_table(&rows, format, &mut stdout),
    }
}

/// Shared renderer for both item rankings.
pub(crate) fn item_table<W: Write>(
    rows: &[ItemFrequency],
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.item_id.to_string(),
                row.unique_order_count.to_string(),
                row.item_name.clone(),
            ]
        })
        .collect();
    output::render(
        format,
        &["item_id", "unique_order_count", "item_name"],
        &cells,
        rows,
        writer,
    )
}
