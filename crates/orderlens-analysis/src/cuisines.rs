//! City-scoped cuisine popularity.

use std::collections::{BTreeMap, HashMap, HashSet};

use orderlens_core::{Dataset, InternedStr};
use tracing::debug;

use crate::outcome::{AnalysisResult, Outcome};
use crate::window::resolve_window;
use crate::DEFAULT_TOP_N;

/// The most popular cuisine tags across all merchants of a city, over the
/// last `days` calendar days.
///
/// A cuisine's popularity is the number of distinct orders containing at
/// least one item tagged with it. Untagged items never contribute, however
/// often they are ordered. Returns at most [`DEFAULT_TOP_N`] tags, most
/// popular first; ties list in tag order.
///
/// # Errors
///
/// See [`resolve_window`].
pub fn popular_cuisines(
    dataset: &Dataset,
    city_id: &str,
    days: u32,
) -> AnalysisResult<Vec<String>> {
    debug!(city_id, days, "analyzing popular cuisines");
    let window = resolve_window(&dataset.orders, days)?;

    let city_merchants: HashSet<&str> = dataset
        .merchants_in_city(city_id)
        .map(|m| m.merchant_id.as_str())
        .collect();
    if city_merchants.is_empty() {
        debug!(city_id, "no merchants registered in city");
        return Ok(Outcome::Empty);
    }

    let order_ids: HashSet<&str> = dataset
        .orders
        .iter()
        .filter(|o| city_merchants.contains(o.merchant_id.as_str()) && window.contains(o.ordered_at))
        .map(|o| o.order_id.as_str())
        .collect();
    if order_ids.is_empty() {
        debug!(city_id, "no orders for city in window");
        return Ok(Outcome::Empty);
    }

    let tagged_items: HashMap<&str, &InternedStr> = dataset
        .items
        .iter()
        .filter_map(|item| item.cuisine.as_ref().map(|tag| (item.item_id.as_str(), tag)))
        .collect();
    if tagged_items.is_empty() {
        debug!("no catalog items carry a cuisine tag");
        return Ok(Outcome::Empty);
    }

    let mut line_hits = 0u64;
    let mut orders_per_cuisine: BTreeMap<&InternedStr, HashSet<&str>> = BTreeMap::new();
    for line in &dataset.order_lines {
        if !order_ids.contains(line.order_id.as_str()) {
            continue;
        }
        line_hits += 1;
        if let Some(tag) = tagged_items.get(line.item_id.as_str()).copied() {
            orders_per_cuisine
                .entry(tag)
                .or_default()
                .insert(line.order_id.as_str());
        }
    }
    if line_hits == 0 {
        debug!(city_id, "no order lines reference the city's orders");
        return Ok(Outcome::Empty);
    }
    if orders_per_cuisine.is_empty() {
        debug!(city_id, "no tagged items among the city's order lines");
        return Ok(Outcome::Empty);
    }

    // Tag order from the BTreeMap + a stable sort on the count alone:
    // equal counts list in tag order.
    let mut ranked: Vec<(&InternedStr, usize)> = orders_per_cuisine
        .into_iter()
        .map(|(tag, orders)| (tag, orders.len()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(DEFAULT_TOP_N);

    Ok(Outcome::Data(
        ranked.into_iter().map(|(tag, _)| tag.to_string()).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use orderlens_core::{Item, Merchant, Order, OrderLine};

    fn ts(s: &str) -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    /// Two merchants in c1; Malaysian in 2 orders, Indian in 1, i3 untagged.
    fn sample() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.merchants.push(Merchant::new("m1", "c1"));
        dataset.merchants.push(Merchant::new("m2", "c1"));
        dataset.merchants.push(Merchant::new("m3", "c2"));

        dataset
            .orders
            .push(Order::new("o1", "m1", ts("2024-03-01T12:00:00+00:00")));
        dataset
            .orders
            .push(Order::new("o2", "m2", ts("2024-03-02T12:00:00+00:00")));
        dataset
            .orders
            .push(Order::new("o3", "m3", ts("2024-03-02T13:00:00+00:00")));

        dataset.order_lines.push(OrderLine::new("o1", "i1", "m1"));
        dataset.order_lines.push(OrderLine::new("o1", "i3", "m1"));
        dataset.order_lines.push(OrderLine::new("o2", "i2", "m2"));
        dataset.order_lines.push(OrderLine::new("o2", "i1", "m2"));
        dataset.order_lines.push(OrderLine::new("o3", "i4", "m3"));

        dataset
            .items
            .push(Item::new("i1", "m1").with_cuisine("Malaysian"));
        dataset
            .items
            .push(Item::new("i2", "m2").with_cuisine("Indian"));
        dataset.items.push(Item::new("i3", "m1").with_name("Iced Tea"));
        dataset
            .items
            .push(Item::new("i4", "m3").with_cuisine("Japanese"));
        dataset
    }

    #[test]
    fn test_ranks_by_distinct_orders() {
        let dataset = sample();
        let cuisines = popular_cuisines(&dataset, "c1", 90)
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(cuisines, vec!["Malaysian", "Indian"]);
    }

    #[test]
    fn test_city_scope_excludes_other_cities() {
        let dataset = sample();
        let cuisines = popular_cuisines(&dataset, "c2", 90)
            .unwrap()
            .into_data()
            .unwrap();
        // Only m3's Japanese order; c1's cuisines must not leak in.
        assert_eq!(cuisines, vec!["Japanese"]);
    }

    #[test]
    fn test_untagged_items_never_contribute() {
        let mut dataset = sample();
        // The untagged i3 becomes the most-ordered item in c1.
        for order_id in ["o1", "o2"] {
            for _ in 0..3 {
                dataset.order_lines.push(OrderLine::new(order_id, "i3", "m1"));
            }
        }
        let cuisines = popular_cuisines(&dataset, "c1", 90)
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(cuisines, vec!["Malaysian", "Indian"]);
    }

    #[test]
    fn test_unknown_city_is_empty() {
        let dataset = sample();
        assert!(popular_cuisines(&dataset, "c404", 90).unwrap().is_empty());
    }

    #[test]
    fn test_untagged_catalog_is_empty() {
        let mut dataset = sample();
        for item in &mut dataset.items {
            item.cuisine = None;
        }
        assert!(popular_cuisines(&dataset, "c1", 90).unwrap().is_empty());
    }

    #[test]
    fn test_caps_at_five_tags() {
        let mut dataset = Dataset::new();
        dataset.merchants.push(Merchant::new("m1", "c1"));
        dataset
            .orders
            .push(Order::new("o1", "m1", ts("2024-03-01T12:00:00+00:00")));
        for i in 0..7 {
            let item_id = format!("i{i}");
            dataset
                .order_lines
                .push(OrderLine::new("o1", item_id.as_str(), "m1"));
            dataset
                .items
                .push(Item::new(item_id, "m1").with_cuisine(format!("cuisine-{i}")));
        }
        let cuisines = popular_cuisines(&dataset, "c1", 90)
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(cuisines.len(), 5);
    }
}
