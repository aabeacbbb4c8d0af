//! List indicators command.

use anyhow::Result;
use trend_core::types::IndicatorKind;
use trend_indicators::IndicatorParams;

pub fn run(params: &IndicatorParams) -> Result<()> {
    println!("Available Indicators");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for kind in IndicatorKind::ALL {
        println!("  {}  (key: {})", kind, params.key(kind));
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", kind.description());
        println!();
    }

    println!(
        "Periods: SMA {}, EMA {}, RSI {}, MACD {}/{}/{}",
        params.sma_period,
        params.ema_period,
        params.rsi_period,
        params.macd_fast,
        params.macd_slow,
        params.macd_signal
    );
    println!();
    println!("Use --indicators SMA,EMA,RSI,MACD to select indicators.");

    Ok(())
}
