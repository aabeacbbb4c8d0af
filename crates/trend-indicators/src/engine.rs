//! Indicator calculations over price series.
//!
//! The `calculate_*` functions read the closing prices of a [`PriceSeries`]
//! and never fail: too little history produces short or empty output.

use serde::{Deserialize, Serialize};
use trend_core::error::IndicatorError;
use trend_core::types::{IndicatorKind, IndicatorOutput, MacdLines, PriceSeries};

use crate::momentum::{macd, rsi};
use crate::moving_average::{ema, sma};

/// Simple moving average of the closes, `n - period + 1` values.
pub fn calculate_sma(series: &PriceSeries, period: usize) -> Vec<f64> {
    sma(&series.closes(), period)
}

/// Exponential moving average of the closes, one value per bar.
pub fn calculate_ema(series: &PriceSeries, period: usize) -> Vec<f64> {
    ema(&series.closes(), period)
}

/// Relative strength index of the closes, `n - period` values.
pub fn calculate_rsi(series: &PriceSeries, period: usize) -> Vec<f64> {
    rsi(&series.closes(), period)
}

/// MACD and signal lines of the closes.
///
/// The conventional periods are 12, 26 and 9 (see [`IndicatorParams`]).
pub fn calculate_macd(
    series: &PriceSeries,
    short_period: usize,
    long_period: usize,
    signal_period: usize,
) -> MacdLines {
    macd(&series.closes(), short_period, long_period, signal_period)
}

/// Periods used for each indicator in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    pub sma_period: usize,
    pub ema_period: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 20,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

impl IndicatorParams {
    /// Check that every period is usable.
    pub fn validate(&self) -> Result<(), IndicatorError> {
        let periods = [
            ("sma_period", self.sma_period),
            ("ema_period", self.ema_period),
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
        ];
        for (name, period) in periods {
            if period == 0 {
                return Err(IndicatorError::InvalidParameter(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
        }

        if self.macd_fast >= self.macd_slow {
            return Err(IndicatorError::InvalidParameter(format!(
                "macd_fast ({}) must be less than macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }

        Ok(())
    }

    /// Report key for `kind` with these periods.
    pub fn key(&self, kind: IndicatorKind) -> String {
        match kind {
            IndicatorKind::Sma => format!("SMA_{}", self.sma_period),
            IndicatorKind::Ema => format!("EMA_{}", self.ema_period),
            IndicatorKind::Rsi => format!("RSI_{}", self.rsi_period),
            IndicatorKind::Macd => "MACD".to_string(),
        }
    }

    /// Closes needed for a first value of `kind`.
    ///
    /// `None` when a period `kind` depends on is zero.
    pub fn lookback(&self, kind: IndicatorKind) -> Option<usize> {
        match kind {
            IndicatorKind::Sma => (self.sma_period > 0).then_some(self.sma_period),
            IndicatorKind::Ema => (self.ema_period > 0).then_some(1),
            IndicatorKind::Rsi => (self.rsi_period > 0).then_some(self.rsi_period + 1),
            IndicatorKind::Macd => (self.macd_fast > 0 && self.macd_slow > 0 && self.macd_signal > 0)
                .then_some(self.macd_signal),
        }
    }

    /// Check that `closes` is long enough for a first value of `kind`.
    pub fn validate_data(&self, kind: IndicatorKind, closes: &[f64]) -> Result<(), IndicatorError> {
        let required = self.lookback(kind).ok_or_else(|| {
            IndicatorError::InvalidParameter(format!("{} period must be greater than 0", kind))
        })?;
        if closes.len() < required {
            return Err(IndicatorError::InsufficientData {
                required,
                available: closes.len(),
            });
        }
        Ok(())
    }

    /// Compute `kind` over `closes`.
    ///
    /// A zero period yields an empty output.
    pub fn evaluate(&self, kind: IndicatorKind, closes: &[f64]) -> IndicatorOutput {
        match kind {
            IndicatorKind::Sma => IndicatorOutput::Series(sma(closes, self.sma_period)),
            IndicatorKind::Ema => IndicatorOutput::Series(ema(closes, self.ema_period)),
            IndicatorKind::Rsi => IndicatorOutput::Series(rsi(closes, self.rsi_period)),
            IndicatorKind::Macd => IndicatorOutput::Macd(macd(
                closes,
                self.macd_fast,
                self.macd_slow,
                self.macd_signal,
            )),
        }
    }
}
