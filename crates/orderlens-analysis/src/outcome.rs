//! The three-way result contract shared by every analysis.
//!
//! Every operation returns `Result<Outcome<T>, AnalysisError>`:
//!
//! - `Ok(Outcome::Data(_))` - the scope matched data;
//! - `Ok(Outcome::Empty)` - the scope is structurally valid but some
//!   filtering stage (window, merchant/city, join) matched zero rows;
//! - `Err(_)` - the question itself could not be answered.
//!
//! Callers must branch on the outcome kind before interpreting a payload;
//! "nothing to report" and "something is broken" are never conflated.

use crate::error::AnalysisError;

/// Non-error outcome of an analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The scope and window matched data.
    Data(T),
    /// Some filtering stage matched zero rows. The stage that went empty is
    /// reported through tracing, not through this value.
    Empty,
}

impl<T> Outcome<T> {
    /// Whether this is the empty-result signal.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The payload, if any, by reference.
    #[must_use]
    pub const fn as_data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Empty => None,
        }
    }

    /// The payload, if any, consuming self.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Empty => None,
        }
    }

    /// Map the payload, preserving `Empty`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Data(data) => Outcome::Data(f(data)),
            Self::Empty => Outcome::Empty,
        }
    }
}

/// Result alias used by all four operations.
pub type AnalysisResult<T> = Result<Outcome<T>, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let data: Outcome<u32> = Outcome::Data(5);
        assert!(!data.is_empty());
        assert_eq!(data.as_data(), Some(&5));
        assert_eq!(data.into_data(), Some(5));

        let empty: Outcome<u32> = Outcome::Empty;
        assert!(empty.is_empty());
        assert_eq!(empty.as_data(), None);
        assert_eq!(empty.into_data(), None);
    }

    #[test]
    fn test_outcome_map() {
        let doubled = Outcome::Data(21).map(|n| n * 2);
        assert_eq!(doubled.into_data(), Some(42));

        let still_empty: Outcome<u32> = Outcome::<u32>::Empty.map(|n| n * 2);
        assert!(still_empty.is_empty());
    }
}
