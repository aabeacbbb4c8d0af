//! Historical price source trait.

use crate::error::DataError;
use crate::types::PriceSeries;
use async_trait::async_trait;

/// Trait for sources of daily price history.
#[async_trait]
pub trait HistoricalPriceSource: Send + Sync {
    /// Fetch daily bars for a ticker.
    ///
    /// # Arguments
    /// * `ticker` - The symbol to fetch
    /// * `days` - Calendar days of history to cover, ending at the most
    ///   recent available bar
    ///
    /// # Returns
    /// A series ordered from oldest to newest. An empty series is a valid
    /// answer and means the source has nothing for the range.
    async fn fetch_historical_prices(&self, ticker: &str, days: u32) -> Result<PriceSeries, DataError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
