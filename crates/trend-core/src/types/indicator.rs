//! Indicator identifiers and computed outputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IndicatorError;

/// The indicators the engine knows how to compute.
///
/// This is a closed set; names outside it are rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndicatorKind {
    /// Simple Moving Average
    Sma,
    /// Exponential Moving Average
    Ema,
    /// Relative Strength Index
    Rsi,
    /// Moving Average Convergence Divergence
    Macd,
}

impl IndicatorKind {
    /// Every indicator, in report order.
    pub const ALL: [IndicatorKind; 4] = [
        IndicatorKind::Sma,
        IndicatorKind::Ema,
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
    ];

    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::Sma => "SMA",
            IndicatorKind::Ema => "EMA",
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Macd => "MACD",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            IndicatorKind::Sma => "Unweighted mean of the last N closes",
            IndicatorKind::Ema => "Exponentially weighted average seeded with the first close",
            IndicatorKind::Rsi => "Momentum oscillator in [0, 100] from average gains and losses",
            IndicatorKind::Macd => "Fast EMA minus slow EMA, with an SMA signal line",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SMA" => Ok(IndicatorKind::Sma),
            "EMA" => Ok(IndicatorKind::Ema),
            "RSI" => Ok(IndicatorKind::Rsi),
            "MACD" => Ok(IndicatorKind::Macd),
            _ => Err(IndicatorError::UnknownIndicator(s.to_string())),
        }
    }
}

/// MACD line and signal line.
///
/// The two lines are not aligned: `signal_line` is shorter by
/// `signal_period - 1` values and both end on the same (most recent) bar,
/// so compare them by indexing from the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdLines {
    /// Fast EMA minus slow EMA, one value per input bar
    pub macd_line: Vec<f64>,
    /// Simple moving average of the MACD line
    pub signal_line: Vec<f64>,
}

impl MacdLines {
    /// Check if both lines are empty.
    pub fn is_empty(&self) -> bool {
        self.macd_line.is_empty() && self.signal_line.is_empty()
    }

    /// Most recent MACD and signal values.
    pub fn latest(&self) -> Option<(f64, f64)> {
        Some((*self.macd_line.last()?, *self.signal_line.last()?))
    }

    /// MACD minus signal over the span where both lines exist.
    pub fn histogram(&self) -> Vec<f64> {
        let offset = self.macd_line.len().saturating_sub(self.signal_line.len());
        self.macd_line[offset..]
            .iter()
            .zip(&self.signal_line)
            .map(|(macd, signal)| macd - signal)
            .collect()
    }
}

/// Computed values for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorOutput {
    /// Single numeric series (SMA, EMA, RSI)
    Series(Vec<f64>),
    /// MACD line pair
    Macd(MacdLines),
}

impl IndicatorOutput {
    /// The empty output for `kind`.
    pub fn empty(kind: IndicatorKind) -> Self {
        match kind {
            IndicatorKind::Macd => IndicatorOutput::Macd(MacdLines::default()),
            _ => IndicatorOutput::Series(Vec::new()),
        }
    }

    /// Check if nothing was computed.
    pub fn is_empty(&self) -> bool {
        match self {
            IndicatorOutput::Series(values) => values.is_empty(),
            IndicatorOutput::Macd(lines) => lines.is_empty(),
        }
    }

    /// Get the single series, if this is one.
    pub fn as_series(&self) -> Option<&[f64]> {
        match self {
            IndicatorOutput::Series(values) => Some(values),
            IndicatorOutput::Macd(_) => None,
        }
    }

    /// Get the MACD lines, if this is a MACD output.
    pub fn as_macd(&self) -> Option<&MacdLines> {
        match self {
            IndicatorOutput::Macd(lines) => Some(lines),
            IndicatorOutput::Series(_) => None,
        }
    }
}
