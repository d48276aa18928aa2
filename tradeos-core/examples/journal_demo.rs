//! Example: recording trades and printing the performance report

use tradeos_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== TradeOS Journal Example ===\n");

    let config = shared::Config::from_env()?;
    let mut store = TradeStore::from_config(&config)?;
    println!("Loaded {} trades", store.trades().len());

    let trade = store
        .record_trade(
            TradeDraft::new("SOL/USDT", Direction::Long, 20.0)
                .closed_at(23.5)
                .with_quantity(50.0)
                .with_tag("breakout")
                .with_notes("Range break with volume"),
        )
        .context("failed to record trade")?;
    println!(
        "Recorded {} {} {}: P&L {:.2} ({:.2}%) {}",
        trade.pair, trade.direction, trade.id, trade.pnl, trade.pnl_percent, trade.status
    );

    if let Err(e) = store.record_trade(TradeDraft::new("BTC/USDT", Direction::Long, 0.0)) {
        println!("Rejected entry: {}", e);
    }

    let metrics = store.metrics();
    println!(
        "Win rate {}% | Profit factor {:.2} | Total P&L {:.2} | Streak {}",
        metrics.win_rate, metrics.profit_factor, metrics.total_pnl, metrics.active_streak
    );

    println!("\nP&L by pair:");
    for row in pnl_by_pair(store.trades()) {
        println!("  {:<10} {:>12.2} ({} trades)", row.pair, row.pnl, row.trades);
    }

    println!("{}", store.report().format());

    store.shutdown();
    Ok(())
}
