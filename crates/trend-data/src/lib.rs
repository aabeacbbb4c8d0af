//! Historical price sources.
//!
//! Every source implements [`HistoricalPriceSource`](trend_core::traits::HistoricalPriceSource)
//! and returns a validated, chronologically ordered series.

mod csv_source;
mod fallback;
mod fmp;
mod memory;
mod providers;

pub use csv_source::CsvPriceSource;
pub use fallback::FallbackSource;
pub use fmp::{FmpPriceSource, FMP_BASE_URL};
pub use memory::MemoryPriceSource;
pub use providers::{build_chain, build_source, ProviderKind, ProviderOptions};
