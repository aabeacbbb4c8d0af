//! SIMD helpers for the momentum indicators.
//!
//! These use the `wide` crate for portable SIMD operations.

use wide::f64x4;

/// Split consecutive differences of `data` into gains and losses.
///
/// Both vectors have `data.len() - 1` entries (empty for fewer than two
/// points): `gain = max(delta, 0)` and `loss = max(-delta, 0)`.
pub fn split_gains_losses(data: &[f64]) -> (Vec<f64>, Vec<f64>) {
    if data.len() < 2 {
        return (vec![], vec![]);
    }

    let deltas = data.len() - 1;
    let mut gains = Vec::with_capacity(deltas);
    let mut losses = Vec::with_capacity(deltas);

    let chunks = deltas / 4;
    let zero = f64x4::splat(0.0);

    for i in 0..chunks {
        let idx = i * 4;
        let prev = f64x4::new([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        let curr = f64x4::new([data[idx + 1], data[idx + 2], data[idx + 3], data[idx + 4]]);

        let diff = curr - prev;
        gains.extend(diff.max(zero).to_array());
        losses.extend((-diff).max(zero).to_array());
    }

    // Remainder
    for i in (chunks * 4)..deltas {
        let change = data[i + 1] - data[i];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    (gains, losses)
}

/// Mean of every `period`-wide window of `values`.
///
/// Each window is summed from scratch so a window of zeros averages to
/// exactly zero.
pub fn window_means(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return vec![];
    }

    let period_f64 = period as f64;
    values
        .windows(period)
        .map(|w| w.iter().sum::<f64>() / period_f64)
        .collect()
}
