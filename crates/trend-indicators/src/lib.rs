//! Technical indicators over daily closing prices.
//!
//! This crate provides:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD)
//! - Series-level entry points (`calculate_sma`, `calculate_ema`,
//!   `calculate_rsi`, `calculate_macd`) and [`IndicatorParams`]
//!
//! Every calculation is pure and returns short or empty output when there is
//! not enough history.

pub mod engine;
pub mod momentum;
pub mod moving_average;
pub mod simd;

pub use engine::{calculate_ema, calculate_macd, calculate_rsi, calculate_sma, IndicatorParams};
pub use momentum::{macd, rsi, rsi_from_averages, Macd, Rsi, RSI_FLAT, RSI_NO_LOSS};
pub use moving_average::{ema, sma, Ema, Sma};
