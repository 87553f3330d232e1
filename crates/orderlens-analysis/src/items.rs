//! Item rankings by distinct-order count.
//!
//! [`popular_items`] and [`low_performing_items`] share one aggregation
//! pipeline ([`crate::frequency`]); they differ only in ranking direction
//! and page size.

use orderlens_core::{Dataset, InternedStr};
use serde::Serialize;
use tracing::debug;

use crate::frequency::item_order_counts;
use crate::outcome::{AnalysisResult, Outcome};
use crate::window::resolve_window;
use crate::DEFAULT_TOP_N;

/// Ranking direction for item-frequency queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Highest distinct-order counts first.
    MostOrdered,
    /// Lowest distinct-order counts first.
    LeastOrdered,
}

/// One ranked item with its distinct-order count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFrequency {
    /// The ranked item.
    pub item_id: InternedStr,
    /// Number of distinct orders the item appeared in.
    pub unique_order_count: u64,
    /// Display name from the catalog, or a synthesized placeholder when
    /// the catalog row or its name is missing.
    pub item_name: String,
}

/// The merchant's most-ordered items over the last `days` calendar days.
///
/// Returns at most [`DEFAULT_TOP_N`] items, ranked by distinct-order count
/// descending. Ties list in item-identifier order.
///
/// # Errors
///
/// See [`resolve_window`].
pub fn popular_items(
    dataset: &Dataset,
    merchant_id: &str,
    days: u32,
) -> AnalysisResult<Vec<ItemFrequency>> {
    debug!(merchant_id, days, "analyzing popular items");
    ranked_items(dataset, merchant_id, days, Ranking::MostOrdered, DEFAULT_TOP_N)
}

/// The merchant's least-ordered items over the last `days` calendar days.
///
/// Returns at most `top_n` items, ranked by distinct-order count ascending.
/// Only items ordered at least once in the window are ranked; the catalog
/// is not joined in to manufacture zero-count rows.
///
/// # Errors
///
/// See [`resolve_window`].
pub fn low_performing_items(
    dataset: &Dataset,
    merchant_id: &str,
    days: u32,
    top_n: usize,
) -> AnalysisResult<Vec<ItemFrequency>> {
    debug!(merchant_id, days, top_n, "analyzing low-performing items");
    ranked_items(dataset, merchant_id, days, Ranking::LeastOrdered, top_n)
}

fn ranked_items(
    dataset: &Dataset,
    merchant_id: &str,
    days: u32,
    ranking: Ranking,
    limit: usize,
) -> AnalysisResult<Vec<ItemFrequency>> {
    let window = resolve_window(&dataset.orders, days)?;

    let mut ranked = match item_order_counts(dataset, merchant_id, window) {
        Outcome::Data(counts) => counts,
        Outcome::Empty => return Ok(Outcome::Empty),
    };

    // Stable sort on the count alone: ties keep item-identifier order.
    match ranking {
        Ranking::MostOrdered => ranked.sort_by(|a, b| b.1.cmp(&a.1)),
        Ranking::LeastOrdered => ranked.sort_by(|a, b| a.1.cmp(&b.1)),
    }
    ranked.truncate(limit);
    if ranked.is_empty() {
        debug!(merchant_id, "no items left after ranking");
        return Ok(Outcome::Empty);
    }

    let catalog = dataset.items_by_id();
    let rows = ranked
        .into_iter()
        .map(|(item_id, unique_order_count)| ItemFrequency {
            item_id: item_id.clone(),
            unique_order_count,
            item_name: catalog
                .get(item_id.as_str())
                .and_then(|item| item.name.clone())
                .unwrap_or_else(|| format!("Unknown Item (ID: {item_id})")),
        })
        .collect();

    Ok(Outcome::Data(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use orderlens_core::{Item, Order, OrderLine};

    fn ts(s: &str) -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    /// Three items for m1: i1 in 3 orders, i2 in 2, i3 in 1.
    fn sample() -> Dataset {
        let mut dataset = Dataset::new();
        for (order_id, day) in [("o1", 1), ("o2", 2), ("o3", 3)] {
            dataset.orders.push(Order::new(
                order_id,
                "m1",
                ts(&format!("2024-03-0{day}T12:00:00+00:00")),
            ));
        }
        for order_id in ["o1", "o2", "o3"] {
            dataset.order_lines.push(OrderLine::new(order_id, "i1", "m1"));
        }
        for order_id in ["o1", "o2"] {
            dataset.order_lines.push(OrderLine::new(order_id, "i2", "m1"));
        }
        dataset.order_lines.push(OrderLine::new("o3", "i3", "m1"));

        dataset.items.push(Item::new("i1", "m1").with_name("Laksa"));
        dataset.items.push(Item::new("i2", "m1").with_name("Satay"));
        dataset.items.push(Item::new("i3", "m1").with_name("Kaya Toast"));
        dataset
    }

    #[test]
    fn test_popular_ranks_descending() {
        let dataset = sample();
        let rows = popular_items(&dataset, "m1", 30)
            .unwrap()
            .into_data()
            .unwrap();

        let ranked: Vec<_> = rows
            .iter()
            .map(|r| (r.item_id.as_str(), r.unique_order_count))
            .collect();
        assert_eq!(ranked, vec![("i1", 3), ("i2", 2), ("i3", 1)]);
        assert_eq!(rows[0].item_name, "Laksa");
    }

    #[test]
    fn test_low_performers_rank_ascending() {
        let dataset = sample();
        let rows = low_performing_items(&dataset, "m1", 30, 2)
            .unwrap()
            .into_data()
            .unwrap();

        let ranked: Vec<_> = rows
            .iter()
            .map(|r| (r.item_id.as_str(), r.unique_order_count))
            .collect();
        assert_eq!(ranked, vec![("i3", 1), ("i2", 2)]);
    }

    #[test]
    fn test_popular_caps_at_five() {
        let mut dataset = Dataset::new();
        dataset
            .orders
            .push(Order::new("o1", "m1", ts("2024-03-01T12:00:00+00:00")));
        for i in 0..8 {
            dataset
                .order_lines
                .push(OrderLine::new("o1", format!("i{i}"), "m1"));
        }
        let rows = popular_items(&dataset, "m1", 30)
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn test_ties_keep_identifier_order() {
        let mut dataset = Dataset::new();
        dataset
            .orders
            .push(Order::new("o1", "m1", ts("2024-03-01T12:00:00+00:00")));
        for item_id in ["i3", "i1", "i2"] {
            dataset.order_lines.push(OrderLine::new("o1", item_id, "m1"));
        }
        let rows = popular_items(&dataset, "m1", 30)
            .unwrap()
            .into_data()
            .unwrap();

        let ids: Vec<_> = rows.iter().map(|r| r.item_id.as_str()).collect();
        assert_eq!(ids, vec!["i1", "i2", "i3"]);
    }

    #[test]
    fn test_missing_catalog_row_gets_placeholder() {
        let mut dataset = sample();
        dataset.order_lines.push(OrderLine::new("o1", "ghost", "m1"));
        let rows = low_performing_items(&dataset, "m1", 30, 10)
            .unwrap()
            .into_data()
            .unwrap();

        let ghost = rows.iter().find(|r| r.item_id == "ghost").unwrap();
        assert_eq!(ghost.item_name, "Unknown Item (ID: ghost)");
    }

    #[test]
    fn test_nameless_catalog_row_gets_placeholder() {
        let mut dataset = sample();
        dataset.items.push(Item::new("i4", "m1"));
        dataset.order_lines.push(OrderLine::new("o1", "i4", "m1"));
        let rows = low_performing_items(&dataset, "m1", 30, 10)
            .unwrap()
            .into_data()
            .unwrap();

        let nameless = rows.iter().find(|r| r.item_id == "i4").unwrap();
        assert_eq!(nameless.item_name, "Unknown Item (ID: i4)");
    }

    #[test]
    fn test_merchant_with_no_orders_is_empty() {
        let dataset = sample();
        assert!(popular_items(&dataset, "m404", 30).unwrap().is_empty());
    }

    #[test]
    fn test_window_excludes_old_orders() {
        let mut dataset = sample();
        // An old order for a different item, outside any 30-day window
        // anchored at 2024-03-03.
        dataset
            .orders
            .push(Order::new("o0", "m1", ts("2023-01-01T12:00:00+00:00")));
        dataset.order_lines.push(OrderLine::new("o0", "i9", "m1"));

        let rows = popular_items(&dataset, "m1", 30)
            .unwrap()
            .into_data()
            .unwrap();
        assert!(rows.iter().all(|r| r.item_id != "i9"));
    }
}
