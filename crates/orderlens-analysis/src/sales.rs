//! Merchant sales summaries over a named period.

use std::collections::HashSet;

use chrono::NaiveDate;
use orderlens_core::{Dataset, Decimal};
use serde::Serialize;
use tracing::debug;

use crate::outcome::{AnalysisResult, Outcome};
use crate::window::{resolve_window, Period};

/// Fallback day-count when the period name is unrecognized.
const FALLBACK_DAYS: u32 = 30;

/// Sales totals for one merchant over a resolved window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    /// Sum of order values over all matching rows.
    pub total_sales: Decimal,
    /// Number of distinct orders. Counting distinct identifiers guards
    /// against accidental row duplication in the order table.
    pub order_count: u64,
    /// Calendar date of the window start.
    pub start_date: NaiveDate,
    /// Calendar date of the window end.
    pub end_date: NaiveDate,
    /// The period name the caller asked for, echoed verbatim.
    pub period_analyzed: String,
}

/// Sales totals for `merchant_id` over the named `period`.
///
/// `period` is one of the names in [`Period`]; unrecognized names fall
/// back to a 30-day window but are still echoed in `period_analyzed`.
///
/// # Errors
///
/// See [`resolve_window`].
pub fn sales_summary(
    dataset: &Dataset,
    merchant_id: &str,
    period: &str,
) -> AnalysisResult<SalesSummary> {
    let days = Period::days_or(period, FALLBACK_DAYS);
    debug!(merchant_id, period, days, "analyzing sales summary");
    let window = resolve_window(&dataset.orders, days)?;

    let mut total_sales = Decimal::ZERO;
    let mut distinct_orders: HashSet<&str> = HashSet::new();
    for order in &dataset.orders {
        if order.merchant_id == merchant_id && window.contains(order.ordered_at) {
            total_sales += order.order_value;
            distinct_orders.insert(order.order_id.as_str());
        }
    }
    if distinct_orders.is_empty() {
        debug!(merchant_id, period, "no orders for merchant in window");
        return Ok(Outcome::Empty);
    }

    Ok(Outcome::Data(SalesSummary {
        total_sales,
        order_count: distinct_orders.len() as u64,
        start_date: window.start_date(),
        end_date: window.end_date(),
        period_analyzed: period.to_string(),
    }))
}
