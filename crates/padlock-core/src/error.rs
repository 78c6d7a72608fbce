//! Error type shared by every rotation entry point.
//!
//! Both variants are detected before any arithmetic runs, so a failed call
//! never produces a partial result.

use thiserror::Error;

/// Errors that can occur when rotating a value on a dial.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RotateError {
    /// The lower bound of the range is greater than the upper bound.
    #[error("invalid range: bottom {bottom} is greater than top {top}")]
    InvalidRange { bottom: i64, top: i64 },

    /// The starting value does not lie within `[bottom, top]`.
    #[error("value {value} is outside the range [{bottom}, {top}]")]
    ValueOutOfRange { value: i64, bottom: i64, top: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message_names_both_bounds() {
        // Arrange
        let err = RotateError::InvalidRange { bottom: 10, top: 5 };

        // Act
        let msg = err.to_string();

        // Assert
        assert_eq!(msg, "invalid range: bottom 10 is greater than top 5");
    }

    #[test]
    fn test_value_out_of_range_message_shows_interval() {
        let err = RotateError::ValueOutOfRange {
            value: 40,
            bottom: 0,
            top: 39,
        };
        assert_eq!(err.to_string(), "value 40 is outside the range [0, 39]");
    }
}
