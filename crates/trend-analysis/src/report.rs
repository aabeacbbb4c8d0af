//! Indicator report generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trend_core::types::IndicatorOutput;

/// Indicators computed for one ticker.
///
/// Serializes flat, with each indicator under its key next to `ticker` and
/// `bars`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    /// Ticker analysed
    pub ticker: String,
    /// Number of bars the indicators were computed from
    pub bars: usize,
    /// Outputs by key (e.g. `SMA_20`)
    #[serde(flatten)]
    pub indicators: BTreeMap<String, IndicatorOutput>,
}

impl IndicatorReport {
    /// Create a report with no indicators.
    pub fn new(ticker: impl Into<String>, bars: usize) -> Self {
        Self {
            ticker: ticker.into(),
            bars,
            indicators: BTreeMap::new(),
        }
    }

    /// Add an indicator output.
    pub fn insert(&mut self, key: impl Into<String>, output: IndicatorOutput) {
        self.indicators.insert(key.into(), output);
    }

    /// Get an indicator output by key.
    pub fn get(&self, key: &str) -> Option<&IndicatorOutput> {
        self.indicators.get(key)
    }

    /// Number of indicators in the report.
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// Check if the report holds no indicators.
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!("  TREND ANALYSIS: {}\n", self.ticker));
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str(&format!("  Bars Analysed:       {}\n\n", self.bars));

        s.push_str("INDICATORS\n");
        s.push_str("───────────────────────────────────────────────────────────\n");

        for (key, output) in &self.indicators {
            match output {
                IndicatorOutput::Series(values) => match values.last() {
                    Some(latest) => s.push_str(&format!(
                        "  {:<20} {:>4} values   latest {:.4}\n",
                        key,
                        values.len(),
                        latest
                    )),
                    None => s.push_str(&format!("  {:<20} insufficient data\n", key)),
                },
                IndicatorOutput::Macd(lines) => {
                    s.push_str(&format!(
                        "  {:<20} {:>4} values   signal {} values\n",
                        key,
                        lines.macd_line.len(),
                        lines.signal_line.len()
                    ));
                    match lines.latest() {
                        Some((macd, signal)) => s.push_str(&format!(
                            "  {:<20} macd {:.4}   signal {:.4}   histogram {:.4}\n",
                            "",
                            macd,
                            signal,
                            macd - signal
                        )),
                        None => s.push_str(&format!("  {:<20} insufficient data\n", "")),
                    }
                }
            }
        }

        if self.indicators.is_empty() {
            s.push_str("  (no indicators requested)\n");
        }

        s.push('\n');
        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
