//! Daily price bars and series.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One trading day of OHLCV data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading day
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: u64,
}

impl PriceBar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Create a bar where every price equals `close`.
    pub fn flat(date: NaiveDate, close: f64) -> Self {
        Self::new(date, close, close, close, close, 0)
    }

    /// Check the OHLC invariants.
    ///
    /// Prices must be positive and finite, and both `open` and `close` must
    /// lie within `[low, high]`.
    pub fn validate(&self) -> Result<(), DataError> {
        let prices = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ];
        for (name, value) in prices {
            if !value.is_finite() || value <= 0.0 {
                return Err(self.invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        if self.low > self.high {
            return Err(self.invalid(format!("low {} above high {}", self.low, self.high)));
        }
        if self.open < self.low || self.open > self.high {
            return Err(self.invalid(format!(
                "open {} outside [{}, {}]",
                self.open, self.low, self.high
            )));
        }
        if self.close < self.low || self.close > self.high {
            return Err(self.invalid(format!(
                "close {} outside [{}, {}]",
                self.close, self.low, self.high
            )));
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> DataError {
        DataError::InvalidBar {
            date: self.date,
            reason,
        }
    }
}

/// Chronologically ordered daily bars for one symbol.
///
/// Dates are strictly increasing and every bar satisfies
/// [`PriceBar::validate`]; both are checked once on construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    /// Symbol identifier
    pub symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from bars that are already sorted ascending by date.
    ///
    /// Out-of-order or duplicated dates are rejected rather than repaired.
    pub fn new(symbol: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self, DataError> {
        for bar in &bars {
            bar.validate()?;
        }

        for pair in bars.windows(2) {
            let (previous, next) = (pair[0].date, pair[1].date);
            if next == previous {
                return Err(DataError::DuplicateDate(next));
            }
            if next < previous {
                return Err(DataError::Unordered { previous, next });
            }
        }

        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    /// Build a series from bars in any order.
    ///
    /// Bars are sorted ascending; when a date appears more than once the bar
    /// that came last in the input wins.
    pub fn from_unordered(symbol: impl Into<String>, mut bars: Vec<PriceBar>) -> Result<Self, DataError> {
        // Stable sort keeps later duplicates after earlier ones.
        bars.sort_by_key(|b| b.date);

        let mut deduped: Vec<PriceBar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match deduped.last_mut() {
                Some(last) if last.date == bar.date => *last = bar,
                _ => deduped.push(bar),
            }
        }

        Self::new(symbol, deduped)
    }

    /// Build a series of flat bars from closing prices, one per calendar day
    /// starting at `start`.
    pub fn from_closes(
        symbol: impl Into<String>,
        start: NaiveDate,
        closes: &[f64],
    ) -> Result<Self, DataError> {
        let bars = closes
            .iter()
            .zip(start.iter_days())
            .map(|(&close, date)| PriceBar::flat(date, close))
            .collect();
        Self::new(symbol, bars)
    }

    /// Create an empty series.
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: Vec::new(),
        }
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice.
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Get the oldest bar.
    pub fn first(&self) -> Option<&PriceBar> {
        self.bars.first()
    }

    /// Get the most recent bar.
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &PriceBar> {
        self.bars.iter()
    }

    /// Keep the bars that fall within `days` calendar days ending at the most
    /// recent bar (inclusive).
    pub fn trailing_days(&self, days: u32) -> Self {
        let bars = match self.bars.last() {
            Some(last) if days > 0 => match last.date.checked_sub_days(Days::new(u64::from(days))) {
                Some(cutoff) => self.bars.iter().filter(|b| b.date > cutoff).copied().collect(),
                None => self.bars.clone(),
            },
            _ => Vec::new(),
        };

        Self {
            symbol: self.symbol.clone(),
            bars,
        }
    }
}
