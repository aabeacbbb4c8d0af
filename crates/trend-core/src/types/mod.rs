//! Core data types for trend analysis.

mod indicator;
mod price;

pub use indicator::{IndicatorKind, IndicatorOutput, MacdLines};
pub use price::{PriceBar, PriceSeries};
