//! Analysis error types.

use thiserror::Error;

/// Error returned when an analysis cannot run.
///
/// Note that "the scope matched nothing" is NOT an error — it is
/// [`Outcome::Empty`](crate::Outcome::Empty). This enum covers the cases
/// where no meaningful answer exists at all.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The order table has no rows, so no window can be anchored.
    #[error("cannot determine the latest order time: the order table is empty")]
    NoData,

    /// The day-count parameter is outside the supported range.
    #[error("invalid day count {0}: must be at least 1")]
    InvalidDays(u32),

    /// An unexpected fault caught at an operation boundary.
    ///
    /// Carries the operation name so callers and logs can attribute the
    /// failure without seeing internals.
    #[error("analysis `{operation}` failed: {message}")]
    Internal {
        /// The operation that failed.
        operation: &'static str,
        /// Description of the fault.
        message: String,
    },
}

impl AnalysisError {
    /// Build an [`AnalysisError::Internal`] for `operation`.
    pub(crate) fn internal(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Internal {
            operation,
            message: message.into(),
        }
    }
}
