//! Error types for trend analysis.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum TrendError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for TrendError {
    fn from(err: serde_json::Error) -> Self {
        TrendError::Serialization(err.to_string())
    }
}

/// Price source and price series errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Bars out of order: {previous} is followed by {next}")]
    Unordered { previous: NaiveDate, next: NaiveDate },

    #[error("Duplicate bar for {0}")]
    DuplicateDate(NaiveDate),

    #[error("Invalid bar for {date}: {reason}")]
    InvalidBar { date: NaiveDate, reason: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Indicator calculation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown indicator: {0} (expected one of SMA, EMA, RSI, MACD)")]
    UnknownIndicator(String),
}

/// Result type alias for trend operations.
pub type TrendResult<T> = Result<T, TrendError>;
