//! CSV ingest for the orderlens dataset.
//!
//! This crate is the loading/type-coercion step that produces the immutable
//! [`Dataset`] snapshot the analysis engine queries. It reads four CSV
//! tables from a data directory:
//!
//! - `merchant.csv` - `merchant_id`, `city_id`
//! - `transaction_data.csv` - `order_id`, `merchant_id`, `order_time`, `order_value`
//! - `transaction_items.csv` - `order_id`, `item_id`, `merchant_id`
//! - `items.csv` - `item_id`, `item_name`, `cuisine_tag`, `merchant_id`
//!
//! and enforces the normalization contract downstream code relies on:
//! identifiers trimmed and interned, every order carrying a parsed
//! timestamp (unusable rows dropped and counted), order values defaulting
//! to zero, and empty names/cuisine tags normalized to `None`.
//!
//! Structural problems (unreadable file, missing required column) are
//! fatal [`IngestError`]s naming the table and column. Per-row anomalies
//! never abort a load; they are collected as [`LoadResult::warnings`].
//!
//! # Example
//!
//! ```ignore
//! use orderlens_ingest::load_dir;
//! use std::path::Path;
//!
//! let result = load_dir(Path::new("data"))?;
//! for warning in &result.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! println!("{} orders loaded", result.dataset.orders.len());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod table;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use orderlens_core::{Dataset, Item, Merchant, Order, OrderLine, StringInterner};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, warn};

use table::{non_empty, parse_order_time, parse_order_value, ColumnMap};

/// File names expected inside the data directory.
const MERCHANT_FILE: &str = "merchant.csv";
const ORDERS_FILE: &str = "transaction_data.csv";
const ORDER_LINES_FILE: &str = "transaction_items.csv";
const ITEMS_FILE: &str = "items.csv";

/// Errors that stop an ingest outright.
#[derive(Debug, Error)]
pub enum IngestError {
    /// IO error reading a table file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A required column is missing from a table.
    #[error("missing required column `{column}` in {table}")]
    MissingColumn {
        /// The table with the missing column.
        table: &'static str,
        /// The missing column name.
        column: &'static str,
    },

    /// The table's header row could not be read.
    #[error("malformed CSV header in {table}")]
    Header {
        /// The malformed table.
        table: &'static str,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

/// Result of loading a data directory.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded, normalized dataset snapshot.
    pub dataset: Dataset,
    /// Non-fatal anomalies encountered while loading, in table order.
    pub warnings: Vec<String>,
}

/// Dataset loader.
///
/// Owns the identifier interner for the load, so all rows referring to the
/// same merchant, order, or item share one allocation in the resulting
/// snapshot.
#[derive(Debug, Default)]
pub struct Ingestor {
    interner: StringInterner,
    warnings: Vec<String>,
}

impl Ingestor {
    /// Create a new ingestor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the four tables from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError`] when a file cannot be read or a required
    /// column is missing. Per-row anomalies are reported as warnings in
    /// the returned [`LoadResult`], never as errors.
    pub fn load_dir(mut self, dir: &Path) -> Result<LoadResult, IngestError> {
        let mut dataset = Dataset::new();

        self.load_merchants(&dir.join(MERCHANT_FILE), &mut dataset)?;
        self.load_orders(&dir.join(ORDERS_FILE), &mut dataset)?;
        self.load_order_lines(&dir.join(ORDER_LINES_FILE), &mut dataset)?;
        self.load_items(&dir.join(ITEMS_FILE), &mut dataset)?;

        info!(
            orders = dataset.orders.len(),
            order_lines = dataset.order_lines.len(),
            items = dataset.items.len(),
            merchants = dataset.merchants.len(),
            warnings = self.warnings.len(),
            "dataset loaded"
        );

        Ok(LoadResult {
            dataset,
            warnings: self.warnings,
        })
    }

    fn open(path: &Path) -> Result<csv::Reader<BufReader<File>>, IngestError> {
        let file = File::open(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file)))
    }

    fn columns(
        table: &'static str,
        reader: &mut csv::Reader<BufReader<File>>,
    ) -> Result<ColumnMap, IngestError> {
        let headers = reader
            .headers()
            .map_err(|source| IngestError::Header { table, source })?;
        Ok(ColumnMap::from_headers(table, headers))
    }

    fn warn(&mut self, message: String) {
        warn!("{message}");
        self.warnings.push(message);
    }

    fn load_merchants(&mut self, path: &Path, dataset: &mut Dataset) -> Result<(), IngestError> {
        let mut reader = Self::open(path)?;
        let columns = Self::columns("merchant", &mut reader)?;
        let merchant_col = columns.require("merchant_id")?;
        let city_col = columns.require("city_id")?;

        for (row, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    self.warn(format!("merchant row {}: {e}", row + 2));
                    continue;
                }
            };
            let merchant_id = self.interner.intern(ColumnMap::get(&record, merchant_col));
            let city_id = self.interner.intern(ColumnMap::get(&record, city_col));
            dataset.merchants.push(Merchant::new(merchant_id, city_id));
        }
        Ok(())
    }

    fn load_orders(&mut self, path: &Path, dataset: &mut Dataset) -> Result<(), IngestError> {
        let mut reader = Self::open(path)?;
        let columns = Self::columns("transaction_data", &mut reader)?;
        let order_col = columns.require("order_id")?;
        let merchant_col = columns.require("merchant_id")?;
        let time_col = columns.require("order_time")?;
        let value_col = columns.require("order_value")?;

        let mut dropped_timestamps = 0usize;
        let mut zeroed_values = 0usize;

        for (row, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    self.warn(format!("transaction_data row {}: {e}", row + 2));
                    continue;
                }
            };

            // Rows without a usable timestamp cannot take part in any
            // windowed analysis; drop them rather than guess.
            let Some(ordered_at) = parse_order_time(ColumnMap::get(&record, time_col)) else {
                dropped_timestamps += 1;
                continue;
            };
            let order_value = match parse_order_value(ColumnMap::get(&record, value_col)) {
                Some(value) => value,
                None => {
                    zeroed_values += 1;
                    Decimal::ZERO
                }
            };

            let order_id = self.interner.intern(ColumnMap::get(&record, order_col));
            let merchant_id = self.interner.intern(ColumnMap::get(&record, merchant_col));
            dataset
                .orders
                .push(Order::new(order_id, merchant_id, ordered_at).with_value(order_value));
        }

        if dropped_timestamps > 0 {
            self.warn(format!(
                "transaction_data: dropped {dropped_timestamps} rows with unparsable order_time"
            ));
        }
        if zeroed_values > 0 {
            self.warn(format!(
                "transaction_data: {zeroed_values} non-numeric order_value values set to 0"
            ));
        }
        Ok(())
    }

    fn load_order_lines(&mut self, path: &Path, dataset: &mut Dataset) -> Result<(), IngestError> {
        let mut reader = Self::open(path)?;
        let columns = Self::columns("transaction_items", &mut reader)?;
        let order_col = columns.require("order_id")?;
        let item_col = columns.require("item_id")?;
        let merchant_col = columns.require("merchant_id")?;

        for (row, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    self.warn(format!("transaction_items row {}: {e}", row + 2));
                    continue;
                }
            };
            let order_id = self.interner.intern(ColumnMap::get(&record, order_col));
            let item_id = self.interner.intern(ColumnMap::get(&record, item_col));
            let merchant_id = self.interner.intern(ColumnMap::get(&record, merchant_col));
            dataset
                .order_lines
                .push(OrderLine::new(order_id, item_id, merchant_id));
        }
        Ok(())
    }

    fn load_items(&mut self, path: &Path, dataset: &mut Dataset) -> Result<(), IngestError> {
        let mut reader = Self::open(path)?;
        let columns = Self::columns("items", &mut reader)?;
        let item_col = columns.require("item_id")?;
        let name_col = columns.require("item_name")?;
        let cuisine_col = columns.require("cuisine_tag")?;
        let merchant_col = columns.require("merchant_id")?;

        for (row, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    self.warn(format!("items row {}: {e}", row + 2));
                    continue;
                }
            };
            let item_id = self.interner.intern(ColumnMap::get(&record, item_col));
            let merchant_id = self.interner.intern(ColumnMap::get(&record, merchant_col));

            let mut item = Item::new(item_id, merchant_id);
            if let Some(name) = non_empty(ColumnMap::get(&record, name_col)) {
                item = item.with_name(name);
            }
            if let Some(tag) = non_empty(ColumnMap::get(&record, cuisine_col)) {
                item = item.with_cuisine(self.interner.intern(tag));
            }
            dataset.items.push(item);
        }
        Ok(())
    }
}

/// Load the four tables from `dir` with default settings.
///
/// This is a convenience function that creates an ingestor and runs one
/// load.
///
/// # Errors
///
/// See [`Ingestor::load_dir`].
pub fn load_dir(dir: &Path) -> Result<LoadResult, IngestError> {
    Ingestor::new().load_dir(dir)
}
