//! In-memory price source.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use trend_core::error::DataError;
use trend_core::traits::HistoricalPriceSource;
use trend_core::types::PriceSeries;

/// Price source backed by series held in memory.
///
/// Tickers are matched case-insensitively. Unknown tickers yield an empty
/// series.
#[derive(Default)]
pub struct MemoryPriceSource {
    series: RwLock<HashMap<String, PriceSeries>>,
}

impl MemoryPriceSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    fn cache_key(ticker: &str) -> String {
        ticker.to_ascii_uppercase()
    }

    /// Store a series under its symbol, replacing any previous one.
    pub fn put(&self, series: PriceSeries) {
        let key = Self::cache_key(&series.symbol);
        self.series.write().insert(key, series);
    }

    /// Store a series, builder style.
    pub fn with_series(self, series: PriceSeries) -> Self {
        self.put(series);
        self
    }

    /// Remove the series for a ticker.
    pub fn clear(&self, ticker: &str) {
        self.series.write().remove(&Self::cache_key(ticker));
    }

    /// Number of tickers held.
    pub fn len(&self) -> usize {
        self.series.read().len()
    }

    /// Check if no ticker is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl HistoricalPriceSource for MemoryPriceSource {
    async fn fetch_historical_prices(&self, ticker: &str, days: u32) -> Result<PriceSeries, DataError> {
        Ok(self
            .series
            .read()
            .get(&Self::cache_key(ticker))
            .map(|series| series.trailing_days(days))
            .unwrap_or_else(|| PriceSeries::empty(ticker)))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(symbol: &str, closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        PriceSeries::from_closes(symbol, start, closes).unwrap()
    }

    #[tokio::test]
    async fn test_put_and_fetch() {
        let source = MemoryPriceSource::new().with_series(series("AAPL", &[1.0, 2.0, 3.0]));

        let fetched = source.fetch_historical_prices("aapl", 90).await.unwrap();
        assert_eq!(fetched.closes(), vec![1.0, 2.0, 3.0]);

        let window = source.fetch_historical_prices("AAPL", 1).await.unwrap();
        assert_eq!(window.closes(), vec![3.0]);
    }

    #[tokio::test]
    async fn test_unknown_ticker_is_empty() {
        let source = MemoryPriceSource::new();
        let fetched = source.fetch_historical_prices("XYZ", 90).await.unwrap();

        assert!(fetched.is_empty());
        assert_eq!(fetched.symbol, "XYZ");
    }

    #[test]
    fn test_clear() {
        let source = MemoryPriceSource::new();
        source.put(series("AAPL", &[1.0]));
        source.put(series("MSFT", &[2.0]));
        assert_eq!(source.len(), 2);

        source.clear("aapl");
        assert_eq!(source.len(), 1);
        assert!(!source.is_empty());
    }

    #[tokio::test]
    async fn test_writes_survive_panicking_writer() {
        use std::sync::Arc;

        let source = Arc::new(MemoryPriceSource::new());
        let writer = Arc::clone(&source);
        let handle = std::thread::spawn(move || {
            let _map = writer.series.write();
            panic!("writer failed while holding the lock");
        });
        assert!(handle.join().is_err());

        source.put(series("AAPL", &[1.0, 2.0]));
        assert_eq!(source.len(), 1);

        let fetched = source.fetch_historical_prices("AAPL", 90).await.unwrap();
        assert_eq!(fetched.closes(), vec![1.0, 2.0]);
    }
}
