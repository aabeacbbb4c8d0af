//! Indicator trait definitions.

use crate::error::IndicatorError;

/// Trait for technical indicators computed over closing prices.
///
/// Implementations are pure: the same input always produces the same output,
/// and insufficient input yields short or empty output rather than an error.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Closing prices, oldest first
    fn calculate(&self, data: &[f64]) -> Self::Output;

    /// Get the minimum data points required for a first value.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Key under which the output is reported (e.g. `SMA_20`).
    fn key(&self) -> String;

    /// Validate that there's enough data.
    fn validate_data(&self, data: &[f64]) -> Result<(), IndicatorError> {
        if data.len() < self.period() {
            return Err(IndicatorError::InsufficientData {
                required: self.period(),
                available: data.len(),
            });
        }
        Ok(())
    }
}
