//! Momentum indicators.

use trend_core::traits::Indicator;
use trend_core::types::MacdLines;

use crate::moving_average::{ema, sma};
use crate::simd;

/// RSI reported when a window has gains and no losses.
pub const RSI_NO_LOSS: f64 = 100.0;

/// RSI reported when a window has neither gains nor losses.
pub const RSI_FLAT: f64 = 50.0;

/// Relative strength index of `data` over `period` deltas.
///
/// Gains and losses of consecutive values are averaged with a plain
/// `period`-wide moving average, giving `data.len() - period` values.
/// Returns an empty vector when there are fewer than `period` deltas.
pub fn rsi(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() <= period {
        return vec![];
    }

    let (gains, losses) = simd::split_gains_losses(data);
    let avg_gains = simd::window_means(&gains, period);
    let avg_losses = simd::window_means(&losses, period);

    avg_gains
        .iter()
        .zip(&avg_losses)
        .map(|(&gain, &loss)| rsi_from_averages(gain, loss))
        .collect()
}

/// RSI for one pair of average gain and average loss.
///
/// A zero average loss resolves to [`RSI_NO_LOSS`], or to [`RSI_FLAT`] when
/// the average gain is zero as well.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain > 0.0 {
            RSI_NO_LOSS
        } else {
            RSI_FLAT
        }
    } else {
        100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
    }
}

/// MACD line and SMA signal line of `data`.
///
/// The MACD line has one value per input point; the signal line has
/// `signal_period - 1` fewer and is not padded.
pub fn macd(data: &[f64], fast_period: usize, slow_period: usize, signal_period: usize) -> MacdLines {
    let fast_ema = ema(data, fast_period);
    let slow_ema = ema(data, slow_period);

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal_line = sma(&macd_line, signal_period);

    MacdLines {
        macd_line,
        signal_line,
    }
}

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes
/// to evaluate overbought or oversold conditions.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Rsi {
    type Output = Vec<f64>;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        rsi(data, self.period)
    }

    fn period(&self) -> usize {
        self.period + 1 // Need period+1 data points
    }

    fn name(&self) -> &str {
        "RSI"
    }

    fn key(&self) -> String {
        format!("RSI_{}", self.period)
    }
}

/// MACD indicator.
///
/// Uses two EMAs to identify trend direction and momentum.
#[derive(Debug, Clone)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Macd {
    /// Create a new MACD with default parameters (12, 26, 9).
    pub fn new() -> Self {
        Self::with_periods(12, 26, 9)
    }

    /// Create a MACD with custom periods.
    pub fn with_periods(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast > 0 && slow > 0 && signal > 0);
        assert!(fast < slow, "Fast period must be less than slow period");
        Self {
            fast_period: fast,
            slow_period: slow,
            signal_period: signal,
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for Macd {
    type Output = MacdLines;

    fn calculate(&self, data: &[f64]) -> MacdLines {
        macd(data, self.fast_period, self.slow_period, self.signal_period)
    }

    fn period(&self) -> usize {
        self.signal_period
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn key(&self) -> String {
        "MACD".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rsi_basic() {
        let rsi = Rsi::new(14);
        // Generate test data with alternating up/down moves
        let data: Vec<f64> = (0..30)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();

        let result = rsi.calculate(&data);
        assert_eq!(result.len(), data.len() - 14);

        // All RSI values should be between 0 and 100
        for value in &result {
            assert!(*value >= 0.0 && *value <= 100.0);
        }
    }

    #[test]
    fn test_rsi_all_gains() {
        let result = rsi(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0], 3);

        assert_eq!(result, vec![RSI_NO_LOSS; 3]);
    }

    #[test]
    fn test_rsi_all_losses() {
        let rsi = Rsi::new(5);
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.calculate(&data);

        assert_eq!(result.len(), 2);
        // All losses = RSI should be 0
        assert!(result.iter().all(|v| v.abs() < 1e-10));
    }

    #[test]
    fn test_rsi_flat_window() {
        let result = rsi(&[5.0, 5.0, 5.0, 5.0], 2);
        assert_eq!(result, vec![RSI_FLAT; 2]);
    }

    #[test]
    fn test_rsi_window_leaving_losses_behind() {
        // Deltas: -0.1, -0.2, +1, +1, +1 (the second window starts with gains only)
        let data = vec![10.0, 9.9, 9.7, 10.7, 11.7, 12.7];
        let result = rsi(&data, 3);

        assert_eq!(result.len(), 3);
        assert!(result[0] > 0.0 && result[0] < 100.0);
        assert_eq!(result[2], RSI_NO_LOSS);
    }

    #[test]
    fn test_rsi_known_value() {
        // Deltas: +2, -1, +4 -> avg gain 2, avg loss 1/3, rs 6
        let result = rsi(&[100.0, 102.0, 101.0, 105.0], 3);

        assert_eq!(result.len(), 1);
        assert!((result[0] - (100.0 - 100.0 / 7.0)).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let rsi_indicator = Rsi::new(5);
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];

        assert!(rsi_indicator.calculate(&data).is_empty());
        assert!(rsi_indicator.validate_data(&data).is_err());
        assert!(rsi(&[], 14).is_empty());
        assert!(rsi(&[1.0, 2.0], 0).is_empty());
        assert_eq!(rsi_indicator.key(), "RSI_5");
    }

    #[test]
    fn test_rsi_from_averages_policy() {
        assert_eq!(rsi_from_averages(1.0, 0.0), 100.0);
        assert_eq!(rsi_from_averages(0.0, 0.0), 50.0);
        assert_eq!(rsi_from_averages(0.0, 1.0), 0.0);
        assert!((rsi_from_averages(1.0, 1.0) - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_macd_basic() {
        let macd_indicator = Macd::new();
        let data: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let result = macd_indicator.calculate(&data);

        assert_eq!(result.macd_line.len(), 50);
        assert_eq!(result.signal_line.len(), 42);
        // In an uptrend, MACD should be positive
        assert!(*result.macd_line.last().unwrap() > 0.0);
        assert_eq!(macd_indicator.key(), "MACD");
    }

    #[test]
    fn test_macd_matches_ema_difference() {
        let data: Vec<f64> = (0..40)
            .map(|i| 50.0 + (i as f64 * 0.3).cos() * 4.0)
            .collect();
        let result = macd(&data, 5, 10, 3);
        let fast = ema(&data, 5);
        let slow = ema(&data, 10);

        for i in 0..data.len() {
            assert_eq!(result.macd_line[i], fast[i] - slow[i]);
        }
        assert_eq!(result.signal_line, sma(&result.macd_line, 3));
    }

    #[test]
    fn test_macd_short_input() {
        let result = macd(&[10.0, 11.0, 12.0], 12, 26, 9);
        assert_eq!(result.macd_line.len(), 3);
        assert!(result.signal_line.is_empty());

        assert!(macd(&[], 12, 26, 9).is_empty());
    }

    #[test]
    #[should_panic(expected = "Fast period must be less than slow period")]
    fn test_macd_rejects_inverted_periods() {
        Macd::with_periods(26, 12, 9);
    }

    proptest! {
        #[test]
        fn prop_rsi_bounded(data in prop::collection::vec(1.0f64..1000.0, 0..120), period in 1usize..30) {
            let result = rsi(&data, period);
            prop_assert_eq!(result.len(), data.len().saturating_sub(period));
            for value in result {
                prop_assert!((0.0..=100.0).contains(&value));
            }
        }

        #[test]
        fn prop_macd_signal_length(data in prop::collection::vec(1.0f64..1000.0, 0..120), signal in 1usize..15) {
            let result = macd(&data, 12, 26, signal);
            prop_assert_eq!(result.macd_line.len(), data.len());
            prop_assert_eq!(result.signal_line.len(), (data.len() + 1).saturating_sub(signal));
        }
    }
}
