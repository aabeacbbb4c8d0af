//! Analyze command.

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;
use trend_analysis::{TrendAnalyzer, TrendRequest};
use trend_config::AppConfig;
use trend_data::{build_chain, ProviderOptions};

use crate::cli::{AnalyzeArgs, OutputFormat};

pub async fn run(args: AnalyzeArgs, config: &AppConfig) -> Result<()> {
    let mut request = TrendRequest::new(args.ticker.trim().to_uppercase())
        .days(args.days.unwrap_or(config.analysis.default_days));
    if !args.indicators.is_empty() {
        request = request.indicators(TrendRequest::parse_indicators(&args.indicators)?);
    }

    let providers = if args.providers.is_empty() {
        config.data.providers.clone()
    } else {
        args.providers.clone()
    };

    // One client for every provider
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.data.fmp.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let options = ProviderOptions {
        csv_path: args.data.clone().or_else(|| config.data.csv_path.clone()),
        fmp_api_key: config.data.fmp.api_key(),
        fmp_base_url: Some(config.data.fmp.base_url.clone()),
    };
    let source = build_chain(&providers, &options, &client).context("Failed to set up price providers")?;
    let analyzer = TrendAnalyzer::with_params(source, config.analysis.params)?;

    let report = analyzer.analyze_trends(&request).await;

    match args.output {
        OutputFormat::Text => println!("{}", report.summary()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(path) = &args.save {
        std::fs::write(path, report.to_json()?)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "Report saved");
    }

    Ok(())
}
