//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trend_data::ProviderKind;

#[derive(Parser)]
#[command(name = "trend")]
#[command(author, version, about = "Technical trend analysis over daily price history")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute indicators for a ticker
    Analyze(AnalyzeArgs),
    /// List available indicators
    Indicators,
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Ticker symbol (e.g. AAPL)
    #[arg(short, long)]
    pub ticker: String,

    /// Calendar days of history (defaults to analysis.default_days)
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Indicators to compute (comma-separated: SMA,EMA,RSI,MACD; default all)
    #[arg(short, long, value_delimiter = ',')]
    pub indicators: Vec<String>,

    /// Price providers to try in order (comma-separated: csv,fmp)
    #[arg(short, long = "provider", value_delimiter = ',')]
    pub providers: Vec<ProviderKind>,

    /// CSV file or directory (overrides data.csv_path)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Save the JSON report to a file
    #[arg(long)]
    pub save: Option<PathBuf>,
}
