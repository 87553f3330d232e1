//! Row records for the four order-data tables.
//!
//! One struct per table:
//!
//! - [`Order`] - a customer order (`transaction_data.csv`)
//! - [`OrderLine`] - a line item within an order (`transaction_items.csv`)
//! - [`Item`] - a sellable product (`items.csv`)
//! - [`Merchant`] - a selling outlet (`merchant.csv`)
//!
//! Records are plain data. Ingest guarantees their normalization contract:
//! identifiers are trimmed, order values default to zero, timestamps are
//! always present, and empty names or cuisine tags are `None`.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::intern::InternedStr;

/// One customer order.
///
/// The order identifier is unique within the order table. The timestamp
/// keeps whatever UTC offset the source data carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub order_id: InternedStr,
    /// The merchant that received the order.
    pub merchant_id: InternedStr,
    /// When the order was placed.
    pub ordered_at: DateTime<FixedOffset>,
    /// Monetary order value. Missing values are zeroed at ingest.
    pub order_value: Decimal,
}

impl Order {
    /// Create an order with a zero value.
    #[must_use]
    pub fn new(
        order_id: impl Into<InternedStr>,
        merchant_id: impl Into<InternedStr>,
        ordered_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            merchant_id: merchant_id.into(),
            ordered_at,
            order_value: Decimal::ZERO,
        }
    }

    /// Set the order value.
    #[must_use]
    pub const fn with_value(mut self, value: Decimal) -> Self {
        self.order_value = value;
        self
    }
}

/// One line item within an order.
///
/// Multiple lines may share an order identifier (several items in one
/// order) and an item identifier (the same item across many orders).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The order this line belongs to.
    pub order_id: InternedStr,
    /// The item that was ordered.
    pub item_id: InternedStr,
    /// Denormalized copy of the order's merchant.
    pub merchant_id: InternedStr,
}

impl OrderLine {
    /// Create an order line.
    #[must_use]
    pub fn new(
        order_id: impl Into<InternedStr>,
        item_id: impl Into<InternedStr>,
        merchant_id: impl Into<InternedStr>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            item_id: item_id.into(),
            merchant_id: merchant_id.into(),
        }
    }
}

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier.
    pub item_id: InternedStr,
    /// The merchant selling this item.
    pub merchant_id: InternedStr,
    /// Display name. `None` when the catalog row has no usable name.
    pub name: Option<String>,
    /// Free-text cuisine category. `None` when absent or empty in the
    /// source data.
    pub cuisine: Option<InternedStr>,
}

impl Item {
    /// Create an item with no name or cuisine tag.
    #[must_use]
    pub fn new(item_id: impl Into<InternedStr>, merchant_id: impl Into<InternedStr>) -> Self {
        Self {
            item_id: item_id.into(),
            merchant_id: merchant_id.into(),
            name: None,
            cuisine: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the cuisine tag.
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<InternedStr>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }
}

/// A selling outlet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    /// Unique merchant identifier.
    pub merchant_id: InternedStr,
    /// The city this merchant operates in.
    pub city_id: InternedStr,
}

impl Merchant {
    /// Create a merchant.
    #[must_use]
    pub fn new(merchant_id: impl Into<InternedStr>, city_id: impl Into<InternedStr>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            city_id: city_id.into(),
        }
    }
}
