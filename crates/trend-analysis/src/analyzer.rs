//! Trend analysis entry point.

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use trend_core::error::IndicatorError;
use trend_core::traits::HistoricalPriceSource;
use trend_core::types::{IndicatorKind, PriceSeries};
use trend_indicators::IndicatorParams;

use crate::report::IndicatorReport;
use crate::request::TrendRequest;

/// Fetches price history and computes the requested indicators.
///
/// The analyzer never fails: when history cannot be fetched every requested
/// indicator is reported empty, so a caller rendering the report into a
/// response always has something to show.
pub struct TrendAnalyzer {
    source: Arc<dyn HistoricalPriceSource>,
    params: IndicatorParams,
}

impl TrendAnalyzer {
    /// Create an analyzer with the default periods (20, 20, 14, 12/26/9).
    pub fn new(source: Arc<dyn HistoricalPriceSource>) -> Self {
        Self {
            source,
            params: IndicatorParams::default(),
        }
    }

    /// Create an analyzer with custom periods.
    pub fn with_params(
        source: Arc<dyn HistoricalPriceSource>,
        params: IndicatorParams,
    ) -> Result<Self, IndicatorError> {
        params.validate()?;
        Ok(Self { source, params })
    }

    /// Get the indicator periods.
    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// Analyse a ticker.
    pub async fn analyze_trends(&self, request: &TrendRequest) -> IndicatorReport {
        info!(
            ticker = %request.ticker,
            days = request.days,
            source = self.source.name(),
            "Analysing trends"
        );

        let series = match self
            .source
            .fetch_historical_prices(&request.ticker, request.days)
            .await
        {
            Ok(series) => series,
            Err(e) => {
                warn!(ticker = %request.ticker, error = %e, "Price history unavailable");
                PriceSeries::empty(request.ticker.clone())
            }
        };

        let mut report = self.analyze_series(&series, &request.indicators);
        report.ticker = request.ticker.clone();
        report
    }

    /// Compute indicators over an already fetched series.
    pub fn analyze_series(
        &self,
        series: &PriceSeries,
        indicators: &BTreeSet<IndicatorKind>,
    ) -> IndicatorReport {
        let closes = series.closes();
        let mut report = IndicatorReport::new(series.symbol.clone(), series.len());

        for &kind in indicators {
            if let Err(e) = self.params.validate_data(kind, &closes) {
                debug!(indicator = %kind, error = %e, "Not enough history");
            }
            report.insert(self.params.key(kind), self.params.evaluate(kind, &closes));
        }

        debug!(ticker = %series.symbol, bars = series.len(), indicators = report.len(), "Analysis complete");
        report
    }
}
