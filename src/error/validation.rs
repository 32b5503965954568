//! Errors raised when a settings patch breaks a field contract.

use thiserror::Error;

/// A rejected settings update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field} range is inverted: {low} > {high}")]
    InvertedRange {
        field: &'static str,
        low: i64,
        high: i64,
    },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} has invalid time '{value}' (expected HH:MM)")]
    InvalidTime { field: String, value: String },

    #[error("{window} window must start before it ends ({start} >= {end})")]
    WindowOrder {
        window: String,
        start: String,
        end: String,
    },

    #[error("invalid blackout date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = ValidationError::OutOfRange {
            field: "creativity_level",
            value: 150,
            min: 0,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "creativity_level must be between 0 and 100 (got 150)"
        );
    }

    #[test]
    fn test_window_order_message() {
        let err = ValidationError::WindowOrder {
            window: "morning".to_string(),
            start: "12:00".to_string(),
            end: "06:00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "morning window must start before it ends (12:00 >= 06:00)"
        );
    }
}
