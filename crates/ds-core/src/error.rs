//! Error types for checked series access.
//!
//! The regular series API is total: empty series report sentinel extrema and
//! never fail. The checked accessors (`try_get`, `try_min`, ...) report the
//! cases the sentinel API papers over.

use thiserror::Error;

/// Result type alias for checked series operations.
pub type Result<T> = core::result::Result<T, SeriesError>;

/// Errors reported by checked series accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// The series holds no values, so its extrema are only sentinels.
    #[error("Series is empty: no minimum or maximum")]
    Empty,

    /// Element index past the end of the series.
    #[error("Index out of bounds: index {index}, length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the series.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_error_display() {
        assert_eq!(
            SeriesError::Empty.to_string(),
            "Series is empty: no minimum or maximum"
        );

        let err = SeriesError::IndexOutOfBounds { index: 5, len: 3 };
        assert_eq!(err.to_string(), "Index out of bounds: index 5, length 3");
    }
}
