//! Moving average indicators.

use trend_core::traits::Indicator;

/// Simple moving average of `data` over a causal window of `period` points.
///
/// Returns `data.len() - period + 1` values, the first one ending at index
/// `period - 1`. Returns an empty vector when `period` is zero or longer than
/// the data.
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return vec![];
    }
    if period == 1 {
        return data.to_vec();
    }

    let mut result = Vec::with_capacity(data.len() - period + 1);
    let period_f64 = period as f64;

    // Initial sum
    let mut sum: f64 = data[..period].iter().sum();
    result.push(sum / period_f64);

    // Sliding window
    for i in period..data.len() {
        sum = sum - data[i - period] + data[i];
        result.push(sum / period_f64);
    }

    result
}

/// Exponential moving average of `data`, one value per input point.
///
/// Seeded with the first value, then
/// `ema[i] = (data[i] - ema[i-1]) * m + ema[i-1]` with `m = 2 / (period + 1)`.
pub fn ema(data: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = data.first() else {
        return vec![];
    };
    if period == 0 {
        return vec![];
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut result = Vec::with_capacity(data.len());

    let mut current = first;
    result.push(current);

    for &price in &data[1..] {
        current = (price - current) * multiplier + current;
        result.push(current);
    }

    result
}

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = Vec<f64>;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        sma(data, self.period)
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }

    fn key(&self) -> String {
        format!("SMA_{}", self.period)
    }
}

/// Exponential Moving Average (EMA).
///
/// Gives more weight to recent prices using an exponential decay. Unlike the
/// SMA it is defined from the very first point.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
}

impl Ema {
    /// Create a new EMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Smoothing factor `2 / (period + 1)`.
    pub fn multiplier(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }
}

impl Indicator for Ema {
    type Output = Vec<f64>;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        ema(data, self.period)
    }

    /// Lookback, not the smoothing period: the first value needs one point.
    fn period(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "EMA"
    }

    fn key(&self) -> String {
        format!("EMA_{}", self.period)
    }
}
