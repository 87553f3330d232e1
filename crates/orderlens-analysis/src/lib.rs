//! Windowed analytics over food-delivery order data.
//!
//! This crate is the analytical core of orderlens: four fixed, named
//! computations over an immutable [`Dataset`](orderlens_core::Dataset)
//! snapshot, each scoped to a merchant or a city and to a "last N days"
//! window anchored at the latest order in the data:
//!
//! - [`popular_items`] - a merchant's most-ordered items
//! - [`low_performing_items`] - a merchant's least-ordered items
//! - [`sales_summary`] - a merchant's totals over a named period
//! - [`popular_cuisines`] - a city's most popular cuisine tags
//!
//! Items and cuisines are ranked by **unique-order-count**: the number of
//! distinct orders they appear in, not the number of line-item rows.
//!
//! Every operation returns the three-way [`Outcome`] contract; see
//! [`outcome`] for how "no data" differs from "broken input". Operations
//! are pure and read-only; any number may run concurrently over one shared
//! snapshot.
//!
//! # Example
//!
//! ```
//! use chrono::DateTime;
//! use orderlens_analysis::{popular_items, Outcome};
//! use orderlens_core::{Dataset, Item, Order, OrderLine};
//!
//! let mut dataset = Dataset::new();
//! let ordered_at = DateTime::parse_from_rfc3339("2024-03-01T12:00:00+00:00").unwrap();
//! dataset.orders.push(Order::new("o1", "m1", ordered_at));
//! dataset.order_lines.push(OrderLine::new("o1", "i1", "m1"));
//! dataset.items.push(Item::new("i1", "m1").with_name("Laksa"));
//!
//! match popular_items(&dataset, "m1", 30).unwrap() {
//!     Outcome::Data(rows) => {
//!         assert_eq!(rows[0].item_name, "Laksa");
//!         assert_eq!(rows[0].unique_order_count, 1);
//!     }
//!     Outcome::Empty => unreachable!("m1 has an order in the window"),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cuisines;
pub mod error;
mod frequency;
pub mod items;
pub mod outcome;
pub mod sales;
pub mod window;

pub use cuisines::popular_cuisines;
pub use error::AnalysisError;
pub use items::{low_performing_items, popular_items, ItemFrequency, Ranking};
pub use outcome::{AnalysisResult, Outcome};
pub use sales::{sales_summary, SalesSummary};
pub use window::{resolve_window, Period, Window};

/// Default window for the item-ranking queries, in days.
pub const DEFAULT_ITEM_DAYS: u32 = 30;

/// Default window for the city cuisine query, in days.
pub const DEFAULT_CUISINE_DAYS: u32 = 90;

/// Default page size for ranked results.
pub const DEFAULT_TOP_N: usize = 5;

/// Default named period for sales summaries.
pub const DEFAULT_SALES_PERIOD: &str = "last_30_days";
