//! Ordered fallback across several price sources.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};
use trend_core::error::DataError;
use trend_core::traits::HistoricalPriceSource;
use trend_core::types::PriceSeries;

/// Tries each source in turn until one returns a non-empty series.
///
/// When no source has data, the last error seen is returned, or an empty
/// series if none failed.
pub struct FallbackSource {
    sources: Vec<Arc<dyn HistoricalPriceSource>>,
}

impl FallbackSource {
    /// Create a fallback chain, highest priority first.
    pub fn new(sources: Vec<Arc<dyn HistoricalPriceSource>>) -> Self {
        Self { sources }
    }

    /// Number of sources in the chain.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if the chain has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[async_trait]
impl HistoricalPriceSource for FallbackSource {
    async fn fetch_historical_prices(&self, ticker: &str, days: u32) -> Result<PriceSeries, DataError> {
        let mut last_error = None;

        for source in &self.sources {
            match source.fetch_historical_prices(ticker, days).await {
                Ok(series) if !series.is_empty() => {
                    debug!(source = source.name(), ticker = %ticker, bars = series.len(), "Source returned data");
                    return Ok(series);
                }
                Ok(_) => {
                    debug!(source = source.name(), ticker = %ticker, "Source returned no data");
                }
                Err(e) => {
                    warn!(source = source.name(), ticker = %ticker, error = %e, "Source failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => Err(e),
            None => Ok(PriceSeries::empty(ticker)),
        }
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
