//! The immutable table-store snapshot.
//!
//! A [`Dataset`] holds the four order-data tables loaded once per process
//! lifetime. Queries only ever read it; nothing in this workspace mutates a
//! dataset after loading. To refresh the data, build a complete new
//! `Dataset` and swap the reference (e.g. replace an `Arc<Dataset>`) —
//! never mutate the tables of a snapshot that queries may be reading.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::record::{Item, Merchant, Order, OrderLine};

/// An in-memory snapshot of the four order-data tables.
///
/// The tables are public: this type is a data carrier, not an abstraction
/// boundary. All derived views (rankings, counts) are computed by the
/// analysis crate and discarded after each call.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// The order table (`transaction_data.csv`).
    pub orders: Vec<Order>,
    /// The order-line table (`transaction_items.csv`).
    pub order_lines: Vec<OrderLine>,
    /// The item catalog (`items.csv`).
    pub items: Vec<Item>,
    /// The merchant table (`merchant.csv`).
    pub merchants: Vec<Merchant>,
}

impl Dataset {
    /// Create an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether all four tables are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
            && self.order_lines.is_empty()
            && self.items.is_empty()
            && self.merchants.is_empty()
    }

    /// The latest order timestamp in the data, if any order exists.
    ///
    /// All "last N days" windows are anchored here rather than at the wall
    /// clock, so a fixed dataset always yields the same answers.
    #[must_use]
    pub fn latest_order_time(&self) -> Option<DateTime<FixedOffset>> {
        self.orders.iter().map(|o| o.ordered_at).max()
    }

    /// Catalog lookup by item identifier.
    ///
    /// Later duplicate rows win, matching a plain "last write" load order.
    #[must_use]
    pub fn items_by_id(&self) -> HashMap<&str, &Item> {
        self.items
            .iter()
            .map(|item| (item.item_id.as_str(), item))
            .collect()
    }

    /// All merchants registered in `city_id`.
    pub fn merchants_in_city<'a>(
        &'a self,
        city_id: &'a str,
    ) -> impl Iterator<Item = &'a Merchant> + 'a {
        self.merchants.iter().filter(move |m| m.city_id == city_id)
    }

    /// Row counts and data freshness, for diagnostics.
    #[must_use]
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            orders: self.orders.len(),
            order_lines: self.order_lines.len(),
            items: self.items.len(),
            merchants: self.merchants.len(),
            latest_order_time: self.latest_order_time(),
        }
    }
}

/// Summary counts over a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    /// Number of orders.
    pub orders: usize,
    /// Number of order lines.
    pub order_lines: usize,
    /// Number of catalog items.
    pub items: usize,
    /// Number of merchants.
    pub merchants: usize,
    /// Timestamp of the most recent order.
    pub latest_order_time: Option<DateTime<FixedOffset>>,
}
