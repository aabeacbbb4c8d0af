//! Analysis requests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use trend_core::error::IndicatorError;
use trend_core::types::IndicatorKind;

/// Days of history fetched when a request does not say.
pub const DEFAULT_DAYS: u32 = 90;

fn default_days() -> u32 {
    DEFAULT_DAYS
}

fn all_indicators() -> BTreeSet<IndicatorKind> {
    IndicatorKind::ALL.into_iter().collect()
}

/// A request to analyse one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRequest {
    /// Ticker symbol (e.g. AAPL)
    pub ticker: String,
    /// Calendar days of history to analyse
    #[serde(default = "default_days")]
    pub days: u32,
    /// Indicators to compute
    #[serde(default = "all_indicators")]
    pub indicators: BTreeSet<IndicatorKind>,
}

impl TrendRequest {
    /// Request every indicator over the default window.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            days: DEFAULT_DAYS,
            indicators: all_indicators(),
        }
    }

    /// Set the history window.
    pub fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Replace the requested indicators.
    pub fn indicators(mut self, indicators: impl IntoIterator<Item = IndicatorKind>) -> Self {
        self.indicators = indicators.into_iter().collect();
        self
    }

    /// Parse indicator names such as `["SMA", "rsi"]`.
    pub fn parse_indicators<S: AsRef<str>>(names: &[S]) -> Result<BTreeSet<IndicatorKind>, IndicatorError> {
        names.iter().map(|name| name.as_ref().parse()).collect()
    }
}
