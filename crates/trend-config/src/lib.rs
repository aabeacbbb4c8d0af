//! Configuration management.

mod settings;

pub use settings::{AnalysisSettings, AppConfig, AppSettings, DataSettings, FmpSettings, LoggingConfig};

use config::{Config, Environment, File};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Load configuration from file and environment.
///
/// Environment variables prefixed with `TREND__` override file values,
/// e.g. `TREND__ANALYSIS__DEFAULT_DAYS=120`.
pub fn load_config(path: &Path) -> Result<AppConfig, SettingsError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("TREND")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("data.providers")
                .try_parsing(true),
        )
        .build()?;

    let app: AppConfig = config.try_deserialize()?;
    app.validate()?;
    Ok(app)
}

impl AppConfig {
    /// Check values the type system cannot.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.analysis.default_days == 0 {
            return Err(SettingsError::Invalid(
                "analysis.default_days must be greater than 0".to_string(),
            ));
        }

        self.analysis
            .params
            .validate()
            .map_err(|e| SettingsError::Invalid(format!("analysis.params: {}", e)))?;

        if self.data.providers.is_empty() {
            return Err(SettingsError::Invalid(
                "data.providers must name at least one provider".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(SettingsError::Invalid(format!(
                "logging.format must be pretty or json, got '{}'",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use trend_data::ProviderKind;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.default_days, 90);
        assert_eq!(config.analysis.params.rsi_period, 14);
        assert_eq!(config.data.providers, vec![ProviderKind::Csv]);
    }

    #[test]
    fn test_load_config_from_file() {
        let file = config_file(
            r#"
[logging]
level = "debug"
format = "json"

[analysis]
default_days = 120

[analysis.params]
sma_period = 50

[data]
providers = ["fmp", "csv"]
csv_path = "prices"
"#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.analysis.default_days, 120);
        assert_eq!(config.analysis.params.sma_period, 50);
        assert_eq!(config.analysis.params.ema_period, 20);
        assert_eq!(config.data.providers, vec![ProviderKind::Fmp, ProviderKind::Csv]);
        assert_eq!(config.data.fmp.api_key_env, "FMP_API_KEY");
    }

    #[test]
    fn test_environment_override() {
        let file = config_file("[app]\nname = \"trend\"\nenvironment = \"development\"\n");
        std::env::set_var("TREND__APP__ENVIRONMENT", "production");

        let config = load_config(file.path()).unwrap();
        std::env::remove_var("TREND__APP__ENVIRONMENT");

        assert_eq!(config.app.environment, "production");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = config_file("[analysis.params]\nmacd_fast = 30\n");
        assert!(matches!(load_config(file.path()), Err(SettingsError::Invalid(msg)) if msg.contains("macd_fast")));

        let file = config_file("[data]\nproviders = []\n");
        assert!(matches!(load_config(file.path()), Err(SettingsError::Invalid(_))));

        let file = config_file("[data]\nproviders = [\"yahoo\"]\n");
        assert!(matches!(load_config(file.path()), Err(SettingsError::Load(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config(Path::new("/no/such/config.toml")),
            Err(SettingsError::Load(_))
        ));
    }

    #[test]
    fn test_to_toml() {
        let rendered = AppConfig::default().to_toml().unwrap();
        assert!(rendered.contains("default_days = 90"));
        assert!(rendered.contains("rsi_period = 14"));
        assert!(rendered.contains("providers = [\"csv\"]"));
    }
}
