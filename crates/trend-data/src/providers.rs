//! Provider identifiers and source construction.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use trend_core::error::DataError;
use trend_core::traits::HistoricalPriceSource;

use crate::{CsvPriceSource, FallbackSource, FmpPriceSource};

/// Known price providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Local CSV files
    Csv,
    /// Financial Modeling Prep REST API
    Fmp,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Csv => "csv",
            ProviderKind::Fmp => "fmp",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ProviderKind::Csv),
            "fmp" => Ok(ProviderKind::Fmp),
            _ => Err(DataError::Configuration(format!(
                "Unknown provider: {} (expected csv or fmp)",
                s
            ))),
        }
    }
}

/// Settings needed to build any provider.
#[derive(Debug, Clone, Default)]
pub struct ProviderOptions {
    /// CSV file or directory
    pub csv_path: Option<PathBuf>,
    /// FMP API key
    pub fmp_api_key: Option<String>,
    /// FMP host override
    pub fmp_base_url: Option<String>,
}

/// Build the source for one provider.
pub fn build_source(
    kind: ProviderKind,
    options: &ProviderOptions,
    client: &Client,
) -> Result<Arc<dyn HistoricalPriceSource>, DataError> {
    match kind {
        ProviderKind::Csv => {
            let path = options.csv_path.as_ref().ok_or_else(|| {
                DataError::Configuration("csv provider requires a data path".to_string())
            })?;
            Ok(Arc::new(CsvPriceSource::new(path.clone())?))
        }
        ProviderKind::Fmp => {
            let api_key = options
                .fmp_api_key
                .as_ref()
                .filter(|key| !key.is_empty())
                .ok_or_else(|| DataError::Configuration("fmp provider requires an API key".to_string()))?;
            let source = FmpPriceSource::new(client.clone(), api_key.clone());
            Ok(match &options.fmp_base_url {
                Some(url) => Arc::new(source.with_base_url(url.clone())),
                None => Arc::new(source),
            })
        }
    }
}

/// Build a source trying `kinds` in order.
pub fn build_chain(
    kinds: &[ProviderKind],
    options: &ProviderOptions,
    client: &Client,
) -> Result<Arc<dyn HistoricalPriceSource>, DataError> {
    let mut sources = kinds
        .iter()
        .map(|&kind| build_source(kind, options, client))
        .collect::<Result<Vec<_>, _>>()?;

    match sources.len() {
        0 => Err(DataError::Configuration("no price providers configured".to_string())),
        1 => Ok(sources.remove(0)),
        _ => Ok(Arc::new(FallbackSource::new(sources))),
    }
}
