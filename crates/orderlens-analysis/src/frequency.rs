//! Shared distinct-order counting for merchant-scoped item queries.
//!
//! Both item rankings (popular and low-performing) use the same metric: the
//! number of distinct orders an item appeared in, within the window. Only
//! the ranking direction and page size differ, so the aggregation lives
//! here once.

use std::collections::{BTreeMap, HashSet};

use orderlens_core::{Dataset, InternedStr};
use tracing::debug;

use crate::outcome::Outcome;
use crate::window::Window;

/// Per-item distinct-order counts for one merchant in one window.
///
/// The result is in item-identifier order; rankings apply a stable sort on
/// the count alone, so ties keep this order. An order containing the same
/// item twice contributes one to that item's count. Items never ordered in
/// the window do not appear at all.
pub(crate) fn item_order_counts<'a>(
    dataset: &'a Dataset,
    merchant_id: &str,
    window: Window,
) -> Outcome<Vec<(&'a InternedStr, u64)>> {
    let order_ids: HashSet<&str> = dataset
        .orders
        .iter()
        .filter(|o| o.merchant_id == merchant_id && window.contains(o.ordered_at))
        .map(|o| o.order_id.as_str())
        .collect();
    if order_ids.is_empty() {
        debug!(merchant_id, "no orders for merchant in window");
        return Outcome::Empty;
    }

    let mut orders_per_item: BTreeMap<&InternedStr, HashSet<&str>> = BTreeMap::new();
    for line in &dataset.order_lines {
        if order_ids.contains(line.order_id.as_str()) {
            orders_per_item
                .entry(&line.item_id)
                .or_default()
                .insert(line.order_id.as_str());
        }
    }
    if orders_per_item.is_empty() {
        debug!(merchant_id, "no order lines reference the window's orders");
        return Outcome::Empty;
    }

    Outcome::Data(
        orders_per_item
            .into_iter()
            .map(|(item_id, orders)| (item_id, orders.len() as u64))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use orderlens_core::{Order, OrderLine};

    use crate::window::resolve_window;

    fn ts(s: &str) -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn sample() -> Dataset {
        let mut dataset = Dataset::new();
        dataset
            .orders
            .push(Order::new("o1", "m1", ts("2024-03-01T12:00:00+00:00")));
        dataset
            .orders
            .push(Order::new("o2", "m1", ts("2024-03-02T12:00:00+00:00")));
        dataset
            .orders
            .push(Order::new("o3", "m2", ts("2024-03-02T13:00:00+00:00")));
        // o1 holds i1 twice and i2 once; o2 holds i1 once.
        dataset.order_lines.push(OrderLine::new("o1", "i1", "m1"));
        dataset.order_lines.push(OrderLine::new("o1", "i1", "m1"));
        dataset.order_lines.push(OrderLine::new("o1", "i2", "m1"));
        dataset.order_lines.push(OrderLine::new("o2", "i1", "m1"));
        // m2's line must never leak into m1's counts.
        dataset.order_lines.push(OrderLine::new("o3", "i9", "m2"));
        dataset
    }

    #[test]
    fn test_counts_distinct_orders_not_rows() {
        let dataset = sample();
        let window = resolve_window(&dataset.orders, 30).unwrap();
        let counts = item_order_counts(&dataset, "m1", window)
            .into_data()
            .unwrap();

        // i1 appears in two orders (twice in o1 counts once); i2 in one.
        assert_eq!(
            counts
                .iter()
                .map(|(id, n)| (id.as_str(), *n))
                .collect::<Vec<_>>(),
            vec![("i1", 2), ("i2", 1)]
        );
    }

    #[test]
    fn test_scoped_to_merchant() {
        let dataset = sample();
        let window = resolve_window(&dataset.orders, 30).unwrap();
        let counts = item_order_counts(&dataset, "m2", window)
            .into_data()
            .unwrap();

        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].0.as_str(), "i9");
    }

    #[test]
    fn test_unknown_merchant_is_empty() {
        let dataset = sample();
        let window = resolve_window(&dataset.orders, 30).unwrap();
        assert!(item_order_counts(&dataset, "m404", window).is_empty());
    }

    #[test]
    fn test_orders_without_lines_are_empty() {
        let mut dataset = Dataset::new();
        dataset
            .orders
            .push(Order::new("o1", "m1", ts("2024-03-01T12:00:00+00:00")));
        let window = resolve_window(&dataset.orders, 30).unwrap();
        assert!(item_order_counts(&dataset, "m1", window).is_empty());
    }
}
