//! sales-summary - a merchant's totals over a named period.

use std::io::Write;

use anyhow::{Context, Result};
use orderlens_analysis::{sales_summary, Outcome, SalesSummary};
use orderlens_core::Dataset;

use crate::output::{self, OutputFormat};

pub fn run(dataset: &Dataset, merchant: &str, period: &str, format: OutputFormat) -> Result<()> {
    let outcome = sales_summary(dataset, merchant, period)
        .with_context(|| format!("sales-summary failed for merchant {merchant}"))?;

    let mut stdout = std::io::stdout();
    match outcome {
        Outcome::Empty => output::render_empty(format, &mut stdout),
        Outcome::Data(summary) => summary_table(&summary, format, &mut stdout),
    }
}

fn summary_table<W: Write>(
    summary: &SalesSummary,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    let cells = vec![vec![
        summary.total_sales.to_string(),
        summary.order_count.to_string(),
        summary.start_date.to_string(),
        summary.end_date.to_string(),
        summary.period_analyzed.clone(),
    ]];
    output::render(
        format,
        &[
            "total_sales",
            "order_count",
            "start_date",
            "end_date",
            "period",
        ],
        &cells,
        summary,
        writer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_table_json_fields() {
        let summary = SalesSummary {
            total_sales: dec!(50.00),
            order_count: 2,
            start_date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            period_analyzed: "last_30_days".to_string(),
        };
        let mut buffer = Vec::new();
        summary_table(&summary, OutputFormat::Json, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["order_count"], 2);
        assert_eq!(value["period_analyzed"], "last_30_days");
        assert_eq!(value["start_date"], "2024-02-02");
    }
}
