//! Core types for orderlens
//!
//! This crate provides the fundamental types used throughout the orderlens
//! project:
//!
//! - [`Order`] - One customer order (id, merchant, timestamp, value)
//! - [`OrderLine`] - One line item within an order
//! - [`Item`] - A sellable product with an optional name and cuisine tag
//! - [`Merchant`] - A selling outlet and its city
//! - [`Dataset`] - The immutable snapshot of the four tables
//! - [`InternedStr`] - Cheaply cloneable identifier strings
//!
//! # Example
//!
//! ```
//! use orderlens_core::{Dataset, Item, Merchant, Order, OrderLine};
//! use chrono::DateTime;
//! use rust_decimal_macros::dec;
//!
//! let ordered_at = DateTime::parse_from_rfc3339("2024-03-01T12:30:00+08:00").unwrap();
//!
//! let mut dataset = Dataset::new();
//! dataset.merchants.push(Merchant::new("m1", "city-9"));
//! dataset.orders.push(Order::new("o1", "m1", ordered_at).with_value(dec!(21.50)));
//! dataset.order_lines.push(OrderLine::new("o1", "i1", "m1"));
//! dataset.items.push(Item::new("i1", "m1").with_name("Laksa").with_cuisine("Malaysian"));
//!
//! assert_eq!(dataset.latest_order_time(), Some(ordered_at));
//! assert_eq!(dataset.merchants_in_city("city-9").count(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dataset;
pub mod intern;
pub mod record;

pub use dataset::{Dataset, DatasetStats};
pub use intern::{InternedStr, StringInterner};
pub use record::{Item, Merchant, Order, OrderLine};

// Re-export commonly used external types
pub use chrono::{DateTime, FixedOffset};
pub use rust_decimal::Decimal;
