//! Trend analysis: fetch price history, compute indicators, report.

mod analyzer;
mod report;
mod request;

pub use analyzer::TrendAnalyzer;
pub use report::IndicatorReport;
pub use request::{TrendRequest, DEFAULT_DAYS};
