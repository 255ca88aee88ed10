//! Error types for the Tenor library.
//!
//! Only date construction and parsing can fail; the pricing path itself is
//! infallible and reports numeric misuse through non-finite `f64` values.

use thiserror::Error;

/// A specialized Result type for Tenor operations.
pub type TenorResult<T> = Result<T, TenorError>;

/// The main error type for Tenor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenorError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl TenorError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = TenorError::invalid_date("2025-2-30");
        assert_eq!(err.to_string(), "Invalid date: 2025-2-30");
    }
}
