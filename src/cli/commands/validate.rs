//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use trend_config::load_config;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            let providers: Vec<&str> = config.data.providers.iter().map(|p| p.as_str()).collect();
            let params = &config.analysis.params;

            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Default days: {}", config.analysis.default_days);
            println!(
                "Periods: SMA {}, EMA {}, RSI {}, MACD {}/{}/{}",
                params.sma_period,
                params.ema_period,
                params.rsi_period,
                params.macd_fast,
                params.macd_slow,
                params.macd_signal
            );
            println!("Providers: {}", providers.join(", "));
            println!(
                "FMP API key: {}",
                if config.data.fmp.api_key().is_some() { "set" } else { "not set" }
            );
            println!();
            println!("Effective configuration:");
            println!("{}", config.to_toml()?);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
