//! Column lookup and value coercion for the CSV tables.
//!
//! Columns are located by header name, so extra columns (including a
//! leading unnamed index column) are ignored and column order never
//! matters. Coercions implement the normalization contract the analysis
//! engine relies on: values are trimmed, money parses to `Decimal` or
//! zero, timestamps parse or the row is dropped, and empty strings mean
//! "absent".

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::IngestError;

/// Header-name to column-index map for one table.
#[derive(Debug)]
pub(crate) struct ColumnMap {
    table: &'static str,
    by_name: HashMap<String, usize>,
}

impl ColumnMap {
    /// Build the map from a header record. The first occurrence of a
    /// duplicated header name wins.
    pub(crate) fn from_headers(table: &'static str, headers: &csv::StringRecord) -> Self {
        let mut by_name = HashMap::new();
        for (index, name) in headers.iter().enumerate() {
            by_name.entry(name.trim().to_string()).or_insert(index);
        }
        Self { table, by_name }
    }

    /// Index of a required column.
    ///
    /// # Errors
    ///
    /// [`IngestError::MissingColumn`] naming the table and column.
    pub(crate) fn require(&self, column: &'static str) -> Result<usize, IngestError> {
        self.by_name
            .get(column)
            .copied()
            .ok_or(IngestError::MissingColumn {
                table: self.table,
                column,
            })
    }

    /// The trimmed cell at `index`, or `""` for a short record.
    pub(crate) fn get<'r>(record: &'r csv::StringRecord, index: usize) -> &'r str {
        record.get(index).unwrap_or("").trim()
    }
}

/// Trimmed non-empty value, or `None`.
pub(crate) fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Parse a monetary value. `None` for empty or unparsable input; callers
/// substitute zero and count the loss.
pub(crate) fn parse_order_value(raw: &str) -> Option<Decimal> {
    Decimal::from_str(non_empty(raw)?).ok()
}

/// Naive timestamp layouts accepted before falling back to a bare date.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an order timestamp.
///
/// Accepts RFC 3339 and offset-suffixed layouts as-is; naive layouts and
/// bare dates are promoted to +00:00. `None` means the row is unusable
/// for any time-windowed analysis and must be dropped.
pub(crate) fn parse_order_time(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = non_empty(raw)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%z") {
        return Some(dt);
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }

    None
}
