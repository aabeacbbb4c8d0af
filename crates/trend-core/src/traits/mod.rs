//! Core traits for trend analysis.

mod data_source;
mod indicator;

pub use data_source::HistoricalPriceSource;
pub use indicator::Indicator;
