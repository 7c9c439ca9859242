//! # Series Math
//!
//! Numeric routines for comparing price series.
//! This crate works on plain `f64` slices and knows nothing about dates;
//! calendar handling lives in `gold_forecast`.

use thiserror::Error;

pub mod forecasting;
pub mod statistics;
pub mod volatility;

pub use forecasting::{
    AverageGrowth, FittedAverageGrowth, FittedHoltWinters, TripleExponentialSmoothing,
};
pub use statistics::{cagr, correlation, mean, percent_change, round_to_cents, total_return};
pub use volatility::{population_std_dev, rolling_std_devs, RollingStandardDeviation};

/// Errors that can occur in series calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for series math operations
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_context() {
        let err = MathError::InsufficientData("need 12 values, have 3".to_string());
        assert_eq!(
            err.to_string(),
            "Insufficient data for calculation: need 12 values, have 3"
        );
    }
}
