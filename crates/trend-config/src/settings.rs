//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use trend_data::{ProviderKind, FMP_BASE_URL};
use trend_indicators::IndicatorParams;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub data: DataSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "trend".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Indicator analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Calendar days of history per request
    pub default_days: u32,
    pub params: IndicatorParams,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            default_days: 90,
            params: IndicatorParams::default(),
        }
    }
}

/// Price provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Providers tried in order
    pub providers: Vec<ProviderKind>,
    /// CSV file or directory for the csv provider
    pub csv_path: Option<PathBuf>,
    pub fmp: FmpSettings,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            providers: vec![ProviderKind::Csv],
            csv_path: Some(PathBuf::from("data")),
            fmp: FmpSettings::default(),
        }
    }
}

/// Financial Modeling Prep settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FmpSettings {
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for FmpSettings {
    fn default() -> Self {
        Self {
            api_key_env: "FMP_API_KEY".to_string(),
            base_url: FMP_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl FmpSettings {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|key| !key.is_empty())
    }
}
