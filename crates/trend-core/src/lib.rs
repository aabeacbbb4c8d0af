//! Core types and traits for trend analysis.
//!
//! This crate provides the foundational building blocks including:
//! - Daily price data (PriceBar, PriceSeries)
//! - Indicator identifiers and outputs (IndicatorKind, IndicatorOutput, MacdLines)
//! - Traits for indicators and historical price sources

pub mod types;
pub mod traits;
pub mod error;

pub use error::{DataError, IndicatorError, TrendError, TrendResult};
pub use types::*;
pub use traits::*;
