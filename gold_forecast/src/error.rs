//! Error types for the gold_forecast crate

use series_math::MathError;
use thiserror::Error;

/// Custom error types for the gold_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Empty series, non-increasing dates or other malformed input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not enough monthly history to form a training window
    #[error("Insufficient history: need at least {required} monthly points, have {available}")]
    InsufficientHistory { required: usize, available: usize },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from the numeric routines
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Date string that is not `YYYY-MM-DD` or `YYYY-MM`
    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
