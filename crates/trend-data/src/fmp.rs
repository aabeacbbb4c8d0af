//! Financial Modeling Prep historical price source.

use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use trend_core::error::DataError;
use trend_core::traits::HistoricalPriceSource;
use trend_core::types::{PriceBar, PriceSeries};

/// Default API host.
pub const FMP_BASE_URL: &str = "https://financialmodelingprep.com";

/// `historical-price-full` response body.
#[derive(Debug, Deserialize)]
struct FmpHistoricalResponse {
    #[serde(default)]
    historical: Option<Vec<FmpBar>>,
    #[serde(rename = "Error Message", default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FmpBar {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    #[serde(default)]
    volume: f64,
}

/// Daily bars from the Financial Modeling Prep REST API.
///
/// The HTTP client is passed in so one connection pool can be shared by every
/// source built at startup.
pub struct FmpPriceSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FmpPriceSource {
    /// Create a source against the public API host.
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: FMP_BASE_URL.to_string(),
        }
    }

    /// Point the source at another host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, ticker: &str) -> String {
        format!("{}/api/v3/historical-price-full/{}", self.base_url, ticker)
    }

    /// Convert a response body into a series.
    ///
    /// The API lists bars newest first.
    fn parse_response(ticker: &str, body: &str) -> Result<PriceSeries, DataError> {
        let response: FmpHistoricalResponse =
            serde_json::from_str(body).map_err(|e| DataError::Parse(e.to_string()))?;

        if let Some(message) = response.error_message {
            return Err(DataError::Api {
                status: 200,
                message,
            });
        }

        let historical = response
            .historical
            .ok_or_else(|| DataError::SymbolNotFound(ticker.to_string()))?;

        let mut bars = Vec::with_capacity(historical.len());
        for record in historical {
            if !record.volume.is_finite() || record.volume < 0.0 {
                return Err(DataError::InvalidBar {
                    date: record.date,
                    reason: format!("volume must be non-negative, got {}", record.volume),
                });
            }
            bars.push(PriceBar::new(
                record.date,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume.round() as u64,
            ));
        }

        PriceSeries::from_unordered(ticker, bars)
    }
}

#[async_trait]
impl HistoricalPriceSource for FmpPriceSource {
    async fn fetch_historical_prices(&self, ticker: &str, days: u32) -> Result<PriceSeries, DataError> {
        let to = Utc::now().date_naive();
        let from = to
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);

        debug!(ticker = %ticker, %from, %to, "Requesting FMP history");

        let resp = self
            .client
            .get(self.url(ticker))
            .query(&[
                ("from", from.to_string()),
                ("to", to.to_string()),
                ("apikey", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| DataError::Connection(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| DataError::Connection(e.to_string()))?;

        if !status.is_success() {
            return Err(DataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Self::parse_response(ticker, &body)
    }

    fn name(&self) -> &str {
        "fmp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_newest_first_response() {
        let body = r#"{
            "symbol": "AAPL",
            "historical": [
                {"date": "2024-01-04", "open": 181.9, "high": 183.1, "low": 180.9, "close": 181.9, "volume": 71983600, "adjClose": 181.2},
                {"date": "2024-01-03", "open": 184.2, "high": 185.9, "low": 183.4, "close": 184.3, "volume": 58414500},
                {"date": "2024-01-02", "open": 187.2, "high": 188.4, "low": 183.9, "close": 185.6, "volume": 82488700}
            ]
        }"#;

        let series = FmpPriceSource::parse_response("AAPL", body).unwrap();

        assert_eq!(series.symbol, "AAPL");
        assert_eq!(series.closes(), vec![185.6, 184.3, 181.9]);
        assert_eq!(series.first().unwrap().date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(series.last().unwrap().volume, 71_983_600);
    }

    #[test]
    fn test_parse_unknown_symbol() {
        let result = FmpPriceSource::parse_response("NOPE", "{}");
        assert!(matches!(result, Err(DataError::SymbolNotFound(t)) if t == "NOPE"));
    }

    #[test]
    fn test_parse_error_message() {
        let body = r#"{"Error Message": "Invalid API KEY."}"#;
        let result = FmpPriceSource::parse_response("AAPL", body);
        assert!(matches!(result, Err(DataError::Api { message, .. }) if message.contains("API KEY")));
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(matches!(
            FmpPriceSource::parse_response("AAPL", "<html>"),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn test_url() {
        let source = FmpPriceSource::new(Client::new(), "key").with_base_url("http://localhost:8080/");
        assert_eq!(
            source.url("MSFT"),
            "http://localhost:8080/api/v3/historical-price-full/MSFT"
        );
        assert_eq!(source.name(), "fmp");
    }
}
