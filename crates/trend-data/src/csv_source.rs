//! CSV price source.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use trend_core::error::DataError;
use trend_core::traits::HistoricalPriceSource;
use trend_core::types::{PriceBar, PriceSeries};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Daily bars read from CSV files.
///
/// `path` is either a single file (served for every ticker) or a directory
/// holding one file per ticker.
pub struct CsvPriceSource {
    path: PathBuf,
}

impl CsvPriceSource {
    /// Create a new CSV source.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DataError> {
        let path = path.into();
        if !path.exists() {
            return Err(DataError::Configuration(format!(
                "CSV path '{}' does not exist",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    /// Resolve the file holding `ticker`.
    fn file_for(&self, ticker: &str) -> Result<PathBuf, DataError> {
        if self.path.is_file() {
            return Ok(self.path.clone());
        }

        let lower = ticker.to_lowercase();
        let candidates = [
            self.path.join(format!("{}.csv", ticker)),
            self.path.join(format!("{}.csv", lower)),
            self.path.join(format!("{}_daily.csv", ticker)),
            self.path.join(format!("{}_daily.csv", lower)),
        ];

        candidates
            .into_iter()
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| DataError::SymbolNotFound(ticker.to_string()))
    }

    /// Load every bar in `path`, sorted by date.
    pub fn load_all(&self, ticker: &str, path: &Path) -> Result<PriceSeries, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;
            let date = parse_date(&record.date)?;

            if !record.volume.is_finite() || record.volume < 0.0 {
                return Err(DataError::InvalidBar {
                    date,
                    reason: format!("volume must be non-negative, got {}", record.volume),
                });
            }

            bars.push(PriceBar::new(
                date,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume.round() as u64,
            ));
        }

        debug!(path = %path.display(), bars = bars.len(), "Loaded CSV bars");
        PriceSeries::from_unordered(ticker, bars)
    }
}

#[async_trait]
impl HistoricalPriceSource for CsvPriceSource {
    async fn fetch_historical_prices(&self, ticker: &str, days: u32) -> Result<PriceSeries, DataError> {
        let path = self.file_for(ticker)?;
        let series = self.load_all(ticker, &path)?;
        Ok(series.trailing_days(days))
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Parse the date formats commonly found in exported price files.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

    for format in formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }

    // Intraday timestamps collapse to their trading day
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.date());
        }
    }

    Err(DataError::Parse(format!("Could not parse date: {}", date_str)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const AAPL_CSV: &str = "\
Date,Open,High,Low,Close,Volume
2024-01-04,101.0,103.0,100.0,102.0,1200
2024-01-02,99.0,101.0,98.0,100.0,1000
2024-01-03,100.0,102.0,99.0,101.0,1100
";

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        assert_eq!(parse_date("2024-01-15").unwrap(), expected);
        assert_eq!(parse_date("2024/01/15").unwrap(), expected);
        assert_eq!(parse_date("01/15/2024").unwrap(), expected);
        assert_eq!(parse_date("2024-01-15 10:30:00").unwrap(), expected);
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_missing_path() {
        assert!(matches!(
            CsvPriceSource::new("/definitely/not/here.csv"),
            Err(DataError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_single_file_is_sorted() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "prices.csv", AAPL_CSV);
        let source = CsvPriceSource::new(path).unwrap();

        let series = source.fetch_historical_prices("AAPL", 90).await.unwrap();

        assert_eq!(series.symbol, "AAPL");
        assert_eq!(series.closes(), vec![100.0, 101.0, 102.0]);
        assert_eq!(series.last().unwrap().volume, 1200);
    }

    #[tokio::test]
    async fn test_directory_lookup_and_window() {
        let dir = TempDir::new().unwrap();
        write(&dir, "aapl_daily.csv", AAPL_CSV);
        let source = CsvPriceSource::new(dir.path()).unwrap();

        let series = source.fetch_historical_prices("AAPL", 2).await.unwrap();
        assert_eq!(series.closes(), vec![101.0, 102.0]);

        let missing = source.fetch_historical_prices("MSFT", 90).await;
        assert!(matches!(missing, Err(DataError::SymbolNotFound(t)) if t == "MSFT"));
    }

    #[tokio::test]
    async fn test_lowercase_headers_ignore_adj_close() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "xyz.csv",
            "date,open,high,low,close,Adj Close\n2024-02-01,10.0,11.0,9.0,10.5,10.1\n",
        );
        let source = CsvPriceSource::new(path).unwrap();

        let series = source.fetch_historical_prices("XYZ", 30).await.unwrap();
        assert_eq!(series.closes(), vec![10.5]);
        assert_eq!(series.first().unwrap().volume, 0);
    }

    #[tokio::test]
    async fn test_invalid_bar_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "bad.csv",
            "Date,Open,High,Low,Close,Volume\n2024-02-01,10.0,11.0,9.0,12.0,100\n",
        );
        let source = CsvPriceSource::new(path).unwrap();

        let result = source.fetch_historical_prices("BAD", 30).await;
        assert!(matches!(result, Err(DataError::InvalidBar { .. })));
    }
}
